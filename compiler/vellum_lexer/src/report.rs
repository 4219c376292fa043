//! Error reporting seam between the scanners and their caller.
//!
//! Reporting is fire-and-forget: a reporter cannot stop the tokenizer or
//! parser, which always produce a usable token. Callers that want to stop
//! early track that themselves between reads.
//!
//! Any `FnMut(Origin, &Location, &Token, &CssError)` closure is a reporter.
//! [`DiagnosticQueue`] is one too, for callers that prefer to collect
//! everything and look at it afterwards.

use vellum_diagnostic::{CssError, Diagnostic, DiagnosticQueue, Location, Origin};

use crate::Token;

/// Receives errors and warnings raised while scanning.
pub trait ErrorReporter {
    /// Called once per problem, with the location where it was detected and
    /// the token being produced or processed at the time.
    fn report(&mut self, origin: Origin, location: &Location, token: &Token, error: &CssError);
}

impl<F> ErrorReporter for F
where
    F: FnMut(Origin, &Location, &Token, &CssError),
{
    fn report(&mut self, origin: Origin, location: &Location, token: &Token, error: &CssError) {
        self(origin, location, token, error);
    }
}

impl ErrorReporter for DiagnosticQueue {
    fn report(&mut self, origin: Origin, location: &Location, token: &Token, error: &CssError) {
        self.add(Diagnostic::new(origin, *location, token.to_string(), error));
    }
}

impl ErrorReporter for &mut DiagnosticQueue {
    fn report(&mut self, origin: Origin, location: &Location, token: &Token, error: &CssError) {
        (**self).report(origin, location, token, error);
    }
}
