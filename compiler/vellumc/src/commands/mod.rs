//! Command handlers for the vellum CLI.
//!
//! Each submodule implements one command. Shared pieces (file loading and
//! the options every command accepts) live here in the module root.

use vellum_diagnostic::emitter::ColorMode;
use vellum_diagnostic::DiagnosticConfig;

mod check;
mod debug;

pub use check::{check_file, check_source, CheckReport};
pub use debug::{lex_file, lex_source, LexOutput};

/// Why an input file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read a stylesheet as raw bytes.
///
/// Invalid UTF-8 is not an error here: the tokenizer decodes it to U+FFFD.
pub fn load_file(path: &str) -> Result<Vec<u8>, LoadError> {
    std::fs::read(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_owned(),
        },
        std::io::ErrorKind::PermissionDenied => LoadError::PermissionDenied {
            path: path.to_owned(),
        },
        _ => LoadError::Io {
            path: path.to_owned(),
            source,
        },
    })
}

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> Vec<u8> {
    match load_file(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Options shared by `lex` and `check`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandOptions {
    pub color: ColorMode,
    /// Stop collecting after this many errors (0 = unlimited).
    pub error_limit: usize,
}

impl Default for CommandOptions {
    fn default() -> Self {
        CommandOptions {
            color: ColorMode::Auto,
            error_limit: DiagnosticConfig::default().error_limit,
        }
    }
}

impl CommandOptions {
    /// Queue configuration for these options.
    pub fn diagnostic_config(&self) -> DiagnosticConfig {
        DiagnosticConfig {
            error_limit: self.error_limit,
            ..DiagnosticConfig::default()
        }
    }
}

/// Parse `--color=` and `--error-limit=` out of `args`.
///
/// Unknown values warn and keep the default; arguments that are not options
/// are ignored so callers can pass the whole tail of the command line.
pub fn parse_command_options(args: &[String]) -> CommandOptions {
    let mut options = CommandOptions::default();

    for arg in args {
        if let Some(mode) = arg.strip_prefix("--color=") {
            if let Some(color) = ColorMode::parse(mode) {
                options.color = color;
            } else {
                eprintln!("warning: unknown color mode '{mode}', options: auto, always, never");
            }
        } else if let Some(limit) = arg.strip_prefix("--error-limit=") {
            if let Ok(limit) = limit.parse() {
                options.error_limit = limit;
            } else {
                eprintln!(
                    "warning: invalid error limit '{limit}', using {}",
                    options.error_limit
                );
            }
        } else if arg.starts_with("--") {
            eprintln!("warning: unknown option '{arg}'");
        }
    }

    options
}

/// The first argument that is not an option.
pub fn file_argument(args: &[String]) -> Option<&str> {
    args.iter()
        .map(String::as_str)
        .find(|arg| !arg.starts_with("--"))
}
