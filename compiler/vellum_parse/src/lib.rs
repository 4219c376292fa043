//! One-token-lookahead parser over CSS tokens.
//!
//! [`Parser`] layers a lookahead token, a stack of open blocks and
//! structured error reporting on top of one or more [`Tokenizer`]s.
//!
//! # Blocks
//!
//! Opening a block (`(`, `[`, `{` or a function token) pushes the tag that
//! closes it. While a block is open, its closer reads as [`Token::Eof`], so
//! code that parses "components until end of input" works unchanged inside
//! any nested block. See [`BlockStack::masks`].

mod block;
mod parser;
mod token_set;

pub use block::{Block, BlockStack};
pub use parser::Parser;
pub use token_set::TokenSet;

pub use vellum_lexer::{
    CssError, ErrorKind, ErrorReporter, Location, Origin, SourceBuffer, Token, TokenTag, Tokenizer,
};
