//! Diagnostic vocabulary shared by the vellum tokenizer and parser.
//!
//! - [`Location`]: byte/char/line snapshot of a scanning position
//! - [`ErrorKind`] and [`CssError`]: what went wrong, and how bad it is
//! - [`Diagnostic`]: an error attached to where and on which token it happened
//! - [`DiagnosticQueue`]: collects, deduplicates and sorts diagnostics
//! - [`emitter`]: renders diagnostics for humans

mod diagnostic;
pub mod emitter;
mod error;
mod location;
pub mod queue;

pub use diagnostic::{Diagnostic, Origin, Severity};
pub use error::{CssError, ErrorKind};
pub use location::Location;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
