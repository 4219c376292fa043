//! Core diagnostic types.
//!
//! A [`Diagnostic`] is the owned, self-contained record of one report: what
//! went wrong ([`ErrorKind`] and message), where ([`Location`]), which
//! component noticed ([`Origin`]), and the token being processed at the time.

use std::fmt;

use crate::{CssError, ErrorKind, Location};

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Component that raised a report.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Origin {
    Tokenizer,
    Parser,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Tokenizer => write!(f, "tokenizer"),
            Origin::Parser => write!(f, "parser"),
        }
    }
}

/// One reported problem, detached from the tokenizer that produced it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: ErrorKind,
    pub message: String,
    pub origin: Origin,
    pub location: Location,
    /// Printed form of the token being processed, empty at end of input.
    pub token: String,
}

impl Diagnostic {
    /// Build a diagnostic from a reporter callback's arguments.
    pub fn new(
        origin: Origin,
        location: Location,
        token: impl Into<String>,
        error: &CssError,
    ) -> Self {
        Diagnostic {
            severity: error.severity(),
            kind: error.kind(),
            message: error.message().to_owned(),
            origin,
            location,
            token: token.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}[{}]: {}",
            self.location, self.severity, self.kind, self.message
        )
    }
}
