//! CSS syntax tokenizer.
//!
//! Turns a [`SourceBuffer`] into a stream of [`Token`]s following the CSS
//! Syntax token grammar. Malformed input never stops the tokenizer: it
//! degrades to a recovery token (`BadString`, `BadUrl`, a `Delim`) and one
//! report through the attached [`ErrorReporter`].
//!
//! # Architecture
//!
//! - [`SourceBuffer`]: immutable shared bytes
//! - [`Cursor`]: byte position plus [`Location`] tracking
//! - [`chars`]: byte classification
//! - [`Token`] / [`TokenTag`]: the token sum type and its discriminant
//! - [`Tokenizer`]: grammar productions and error routing

pub mod chars;
mod cursor;
mod report;
mod source_buffer;
mod token;
mod tokenizer;

pub use cursor::Cursor;
pub use report::ErrorReporter;
pub use source_buffer::SourceBuffer;
pub use token::{Token, TokenTag};
pub use tokenizer::{ScanError, Tokenizer};

pub use vellum_diagnostic::{CssError, ErrorKind, Location, Origin};
