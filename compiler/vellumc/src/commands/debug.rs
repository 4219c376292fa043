//! The `lex` command: print the token stream of a stylesheet.

use vellum_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use vellum_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue};
use vellum_lexer::{Location, SourceBuffer, Token, Tokenizer};

use super::{read_file, CommandOptions};

/// Every token of a source with where it starts, plus what the tokenizer
/// reported along the way.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput {
    /// Tokens in source order, without the final `Eof`.
    pub tokens: Vec<(Location, Token)>,
    /// Reports sorted by location.
    pub diagnostics: Vec<Diagnostic>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Tokenize `source` to the end.
pub fn lex_source(source: impl Into<SourceBuffer>, config: DiagnosticConfig) -> LexOutput {
    let mut queue = DiagnosticQueue::with_config(config);
    let mut tokens = Vec::new();
    {
        let mut tokenizer = Tokenizer::with_reporter(source, &mut queue);
        loop {
            let location = tokenizer.location();
            let token = tokenizer.read_token();
            if token.is_eof() {
                break;
            }
            tokens.push((location, token));
        }
    }

    LexOutput {
        tokens,
        diagnostics: queue.flush(),
    }
}

/// Lex a file and display the token stream.
///
/// Tokenizer errors go to stderr. Exits with status 1 when any of them is
/// an error rather than a warning.
pub fn lex_file(path: &str, options: &CommandOptions) {
    let content = read_file(path);
    let output = lex_source(content, options.diagnostic_config());

    println!("Tokens for '{}' ({} tokens):", path, output.tokens.len());
    for (location, token) in &output.tokens {
        println!("  {:<24} @ {location}  {token}", format!("{:?}", token.tag()));
    }

    if output.diagnostics.is_empty() {
        return;
    }

    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::with_color_mode(std::io::stderr(), options.color, is_tty)
        .with_file_path(path);
    emitter.emit_all(&output.diagnostics);
    emitter.flush();

    if output.has_errors() {
        std::process::exit(1);
    }
}
