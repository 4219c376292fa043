//! Parser state, sources and token access.
//!
//! The parser holds at most one lookahead token. [`Token::Eof`] in the
//! lookahead slot means "nothing buffered": the next access scans a fresh
//! token from the front source, which is cheap once that source is
//! exhausted.

mod blocks;
mod consume;

use std::fmt;

use tracing::{error, trace, warn};
use vellum_lexer::{
    CssError, ErrorReporter, Location, Origin, SourceBuffer, Token, TokenTag, Tokenizer,
};

use crate::{BlockStack, TokenSet};

/// Returned in place of a token that closes the innermost open block.
static EOF: Token = Token::Eof;

/// Lookahead parser over a stack of tokenizers.
///
/// The optional reporter receives every tokenizer and parser error. It is
/// dropped together with the parser.
pub struct Parser<'r> {
    /// Attached sources; the last one is read first.
    sources: Vec<Tokenizer<'r>>,
    blocks: BlockStack,
    /// Lookahead, or `Eof` when nothing is buffered.
    token: Token,
    /// Where the lookahead starts.
    location: Location,
    reporter: Option<Box<dyn ErrorReporter + 'r>>,
}

impl fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("sources", &self.sources.len())
            .field("blocks", &self.blocks)
            .field("token", &self.token)
            .field("location", &self.location)
            .field("has_reporter", &self.reporter.is_some())
            .finish()
    }
}

impl Default for Parser<'_> {
    fn default() -> Self {
        Parser::new()
    }
}

impl<'r> Parser<'r> {
    /// Parser with no sources and no reporter. Errors are logged through
    /// `tracing`.
    pub fn new() -> Self {
        Parser {
            sources: Vec::new(),
            blocks: BlockStack::new(),
            token: Token::Eof,
            location: Location::origin(),
            reporter: None,
        }
    }

    pub fn with_reporter(reporter: impl ErrorReporter + 'r) -> Self {
        Parser {
            reporter: Some(Box::new(reporter)),
            ..Parser::new()
        }
    }

    /// Parser reading `source`, reporting to `reporter`.
    pub fn for_bytes(source: impl Into<SourceBuffer>, reporter: impl ErrorReporter + 'r) -> Self {
        let mut parser = Parser::with_reporter(reporter);
        parser.add_bytes(source);
        parser
    }

    // ─── Sources ───

    /// Push `tokenizer` in front of the current sources.
    ///
    /// Tokens come from the most recently added source until it is
    /// exhausted, then from the one below it.
    pub fn add_tokenizer(&mut self, tokenizer: Tokenizer<'r>) {
        self.sources.push(tokenizer);
    }

    /// Push a tokenizer over `source`. See [`add_tokenizer`](Self::add_tokenizer).
    pub fn add_bytes(&mut self, source: impl Into<SourceBuffer>) {
        self.add_tokenizer(Tokenizer::new(source));
    }

    /// Fill the lookahead slot if it is empty.
    fn ensure_token(&mut self) {
        if !self.token.is_eof() {
            return;
        }

        while let Some(source) = self.sources.last_mut() {
            self.location = source.location();
            let (token, scan_error) = source.scan();
            if let Some(scan_error) = scan_error {
                match self.reporter.as_mut() {
                    Some(reporter) => reporter.report(
                        Origin::Tokenizer,
                        &scan_error.location,
                        &token,
                        &scan_error.error,
                    ),
                    None => source.report(&token, &scan_error),
                }
            }

            if token.is_eof() && self.sources.len() > 1 {
                trace!("source exhausted, continuing with the next");
                self.sources.pop();
                continue;
            }

            trace!(location = %self.location, token = ?token, "lookahead");
            self.token = token;
            return;
        }
    }

    // ─── Token access ───

    /// The lookahead token, without consuming it.
    ///
    /// Shows [`Token::Eof`] when the lookahead closes the innermost open
    /// block (see [`BlockStack::masks`]).
    pub fn peek_token(&mut self) -> &Token {
        self.ensure_token();
        if self.blocks.masks(&self.token) {
            &EOF
        } else {
            &self.token
        }
    }

    /// The first significant token, consuming whitespace and comments.
    pub fn get_token(&mut self) -> &Token {
        while matches!(self.peek_token(), Token::Whitespace | Token::Comment) {
            self.consume_token();
        }
        self.peek_token()
    }

    /// Commit to the lookahead token.
    ///
    /// Block openers must go through [`start_block`](Self::start_block)
    /// instead. A lookahead that closes the innermost open block is left
    /// in place.
    pub fn consume_token(&mut self) {
        self.ensure_token();

        debug_assert!(
            self.token.is_preserved(),
            "block opener {:?} must be consumed with start_block",
            self.token
        );
        if !self.token.is_preserved() {
            error!(token = ?self.token, "consume_token called on a block opener");
            return;
        }

        if !self.blocks.masks(&self.token) {
            self.token.clear();
        }
    }

    /// Whether the first significant token has tag `tag`.
    pub fn has_token(&mut self, tag: TokenTag) -> bool {
        self.get_token().is(tag)
    }

    /// Whether the first significant token is in `set`.
    pub fn has_any(&mut self, set: TokenSet) -> bool {
        set.matches(self.get_token())
    }

    pub fn has_ident(&mut self, name: &str) -> bool {
        self.get_token().is_ident(name)
    }

    pub fn has_function(&mut self, name: &str) -> bool {
        self.get_token().is_function(name)
    }

    /// A signed or signless integer.
    pub fn has_integer(&mut self) -> bool {
        self.get_token().tag().is_integer()
    }

    /// Any of the four plain numeric kinds.
    pub fn has_number(&mut self) -> bool {
        self.get_token().tag().is_number()
    }

    pub fn has_percentage(&mut self) -> bool {
        self.has_token(TokenTag::Percentage)
    }

    /// End of input, or the end of the innermost open block.
    pub fn is_eof(&mut self) -> bool {
        self.get_token().is_eof()
    }

    // ─── Locations ───

    /// Where the lookahead token starts.
    pub fn start_location(&mut self) -> Location {
        self.ensure_token();
        self.location
    }

    /// Where the lookahead token ends.
    pub fn end_location(&mut self) -> Location {
        self.ensure_token();
        self.sources
            .last()
            .map_or(self.location, Tokenizer::location)
    }

    /// Where the innermost open block starts, or the lookahead's start when
    /// no block is open.
    pub fn block_location(&mut self) -> Location {
        let block_start = self.blocks.top().map(|block| block.start);
        match block_start {
            Some(start) => start,
            None => self.start_location(),
        }
    }

    /// Number of open blocks.
    pub fn depth(&self) -> usize {
        self.blocks.len()
    }

    // ─── Reporting ───

    /// Report `error` at `location` against the real lookahead token.
    fn emit(&mut self, location: Location, error: &CssError) {
        match self.reporter.as_mut() {
            Some(reporter) => reporter.report(Origin::Parser, &location, &self.token, error),
            None => warn!(%location, kind = %error.kind(), token = %self.token, "{error}"),
        }
    }

    /// Report `error` at the start of the lookahead token.
    pub fn report(&mut self, error: &CssError) {
        let location = self.start_location();
        self.emit(location, error);
    }

    /// The input does not match the grammar here.
    #[cold]
    pub fn error_syntax(&mut self, message: impl Into<String>) {
        self.report(&CssError::syntax(message));
    }

    /// Well-formed input naming a value that is not known.
    #[cold]
    pub fn error_value(&mut self, message: impl Into<String>) {
        self.report(&CssError::unknown_value(message));
    }

    #[cold]
    pub fn error_import(&mut self, message: impl Into<String>) {
        self.report(&CssError::import(message));
    }

    /// Recoverable oddity that still parses.
    #[cold]
    pub fn warn_syntax(&mut self, message: impl Into<String>) {
        self.report(&CssError::syntax_warning(message));
    }

    #[cold]
    pub fn warn_deprecated(&mut self, message: impl Into<String>) {
        self.report(&CssError::deprecated(message));
    }
}
