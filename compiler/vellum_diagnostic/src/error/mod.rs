//! Error kinds and the error value passed to reporters.

use std::fmt;

use crate::Severity;

/// Category of a reported problem.
///
/// The tokenizer only ever reports [`ErrorKind::Syntax`]. The others are
/// raised by the parser or by the styling code built on top of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input does not match the grammar.
    Syntax,
    /// Well-formed input naming a value the consumer does not know.
    UnknownValue,
    /// An import could not be resolved.
    Import,
    /// Generic failure outside the other categories.
    Failed,
    /// Recoverable structural anomaly.
    SyntaxWarning,
    /// Accepted input that is slated for removal.
    DeprecatedWarning,
}

impl ErrorKind {
    pub fn severity(self) -> Severity {
        match self {
            ErrorKind::Syntax | ErrorKind::UnknownValue | ErrorKind::Import | ErrorKind::Failed => {
                Severity::Error
            }
            ErrorKind::SyntaxWarning | ErrorKind::DeprecatedWarning => Severity::Warning,
        }
    }

    /// Short tag used when rendering diagnostics, e.g. `error[syntax]`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Syntax | ErrorKind::SyntaxWarning => "syntax",
            ErrorKind::UnknownValue => "unknown-value",
            ErrorKind::Import => "import",
            ErrorKind::Failed => "failed",
            ErrorKind::DeprecatedWarning => "deprecated",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem found while tokenizing or parsing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct CssError {
    kind: ErrorKind,
    message: String,
}

impl CssError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        CssError {
            kind,
            message: message.into(),
        }
    }

    #[cold]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax, message)
    }

    #[cold]
    pub fn unknown_value(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownValue, message)
    }

    #[cold]
    pub fn import(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Import, message)
    }

    #[cold]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Failed, message)
    }

    #[cold]
    pub fn syntax_warning(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SyntaxWarning, message)
    }

    #[cold]
    pub fn deprecated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DeprecatedWarning, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}
