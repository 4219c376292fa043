//! CSS syntax tokenizer.
//!
//! [`Tokenizer::read_token`] dispatches on the first byte (with a few bytes
//! of lookahead) to one grammar production. Productions never fail: on
//! malformed input they produce a recovery token and record one
//! [`ScanError`], which is then routed to the reporter.
//!
//! End of input is sticky. Once the cursor is exhausted every call returns
//! [`Token::Eof`] and the location stops moving.

mod numeric;

use std::fmt;

use tracing::warn;
use vellum_diagnostic::{CssError, Location, Origin};

use crate::chars::{hex_value, is_name, is_name_start, is_newline, is_non_printable, is_whitespace};
use crate::{Cursor, ErrorReporter, SourceBuffer, Token};

/// A problem found while producing one token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanError {
    /// Where the problem was detected.
    pub location: Location,
    pub error: CssError,
}

/// Forward-only tokenizer over one [`SourceBuffer`].
///
/// The optional reporter is dropped together with the tokenizer.
pub struct Tokenizer<'r> {
    cursor: Cursor,
    reporter: Option<Box<dyn ErrorReporter + 'r>>,
    pending: Option<ScanError>,
}

impl fmt::Debug for Tokenizer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("location", &self.cursor.location())
            .field("has_reporter", &self.reporter.is_some())
            .finish_non_exhaustive()
    }
}

impl<'r> Tokenizer<'r> {
    /// Tokenizer without a reporter. Errors are logged through `tracing`.
    pub fn new(source: impl Into<SourceBuffer>) -> Self {
        Tokenizer {
            cursor: Cursor::new(source.into()),
            reporter: None,
            pending: None,
        }
    }

    pub fn with_reporter(source: impl Into<SourceBuffer>, reporter: impl ErrorReporter + 'r) -> Self {
        Tokenizer {
            cursor: Cursor::new(source.into()),
            reporter: Some(Box::new(reporter)),
            pending: None,
        }
    }

    /// Where the next token will start.
    #[inline]
    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Read the next token and report any problem found on the way.
    pub fn read_token(&mut self) -> Token {
        let (token, error) = self.scan();
        if let Some(error) = error {
            self.report(&token, &error);
        }
        token
    }

    /// Route an error returned by [`scan`](Self::scan) to this tokenizer's
    /// reporter, or log it when there is none.
    pub fn report(&mut self, token: &Token, error: &ScanError) {
        let ScanError { location, error } = error;
        match self.reporter.as_mut() {
            Some(reporter) => reporter.report(Origin::Tokenizer, location, token, error),
            None => warn!(%location, token = %token, "{error}"),
        }
    }

    /// Read the next token and hand back any problem instead of reporting it.
    pub fn scan(&mut self) -> (Token, Option<ScanError>) {
        self.pending = None;
        let token = self.next_token();
        (token, self.pending.take())
    }

    // ─── Errors ───

    #[cold]
    #[inline(never)]
    fn syntax_error(&mut self, location: Location, message: impl Into<String>) {
        debug_assert!(self.pending.is_none(), "one error per token");
        self.pending = Some(ScanError {
            location,
            error: CssError::syntax(message),
        });
    }

    // ─── Lookahead ───

    /// `\` at `offset` that is not followed by a newline.
    fn is_valid_escape_at(&self, offset: usize) -> bool {
        self.cursor.remaining() > offset
            && self.cursor.byte_at(offset) == b'\\'
            && !is_newline(self.cursor.byte_at(offset + 1))
    }

    /// Whether the input at `offset` would start an identifier.
    fn has_identifier_at(&self, offset: usize) -> bool {
        let mut i = offset;
        if self.cursor.remaining() <= i {
            return false;
        }
        if self.cursor.byte_at(i) == b'-' {
            i += 1;
            if self.cursor.remaining() <= i {
                return false;
            }
            if self.cursor.byte_at(i) == b'-' {
                return true;
            }
        }
        is_name_start(self.cursor.byte_at(i)) || self.is_valid_escape_at(i)
    }

    /// Optional sign, optional `.`, then a digit.
    fn has_number(&self) -> bool {
        let mut i = 0;
        if matches!(self.cursor.byte_at(i), b'+' | b'-') {
            i += 1;
        }
        if self.cursor.byte_at(i) == b'.' {
            i += 1;
        }
        self.cursor.byte_at(i).is_ascii_digit()
    }

    // ─── Dispatch ───

    fn next_token(&mut self) -> Token {
        if self.cursor.is_eof() {
            return Token::Eof;
        }

        if self.cursor.starts_with(b"/*") {
            return self.read_comment();
        }

        match self.cursor.current() {
            b'\n' | b'\r' | b'\t' | 0x0C | b' ' => self.read_whitespace(),
            b'"' | b'\'' => self.read_string(),
            b'#' => self.read_hash(),
            b'$' => self.read_match(Token::SuffixMatch),
            b'(' => self.single(Token::OpenParens),
            b')' => self.single(Token::CloseParens),
            b'*' => self.read_match(Token::SubstringMatch),
            b'+' | b'.' => {
                if self.has_number() {
                    self.read_numeric()
                } else {
                    self.read_delim()
                }
            }
            b',' => self.single(Token::Comma),
            b'-' => self.read_dash(),
            b':' => self.single(Token::Colon),
            b';' => self.single(Token::Semicolon),
            b'<' => {
                if self.cursor.starts_with(b"<!--") {
                    self.cursor.advance_ascii(4);
                    Token::Cdo
                } else {
                    self.read_delim()
                }
            }
            b'@' => self.read_at_keyword(),
            b'[' => self.single(Token::OpenSquare),
            b'\\' => {
                if self.is_valid_escape_at(0) {
                    self.read_ident_like()
                } else {
                    let location = self.cursor.location();
                    self.cursor.advance_ascii(1);
                    self.syntax_error(location, "Newline may not follow '\\' escape character");
                    Token::Delim('\\')
                }
            }
            b']' => self.single(Token::CloseSquare),
            b'^' => self.read_match(Token::PrefixMatch),
            b'{' => self.single(Token::OpenCurly),
            b'}' => self.single(Token::CloseCurly),
            b'|' => {
                if self.cursor.peek() == b'|' {
                    self.cursor.advance_ascii(2);
                    Token::Column
                } else {
                    self.read_match(Token::DashMatch)
                }
            }
            b'~' => self.read_match(Token::IncludeMatch),
            b'0'..=b'9' => self.read_numeric(),
            b if is_name_start(b) => self.read_ident_like(),
            _ => self.read_delim(),
        }
    }

    /// One ASCII byte that always forms `token`.
    #[inline]
    fn single(&mut self, token: Token) -> Token {
        self.cursor.advance_ascii(1);
        token
    }

    fn read_delim(&mut self) -> Token {
        Token::Delim(self.cursor.consume_char())
    }

    /// `X=` forms `token`, a lone `X` is a delimiter.
    fn read_match(&mut self, token: Token) -> Token {
        if self.cursor.peek() == b'=' {
            self.cursor.advance_ascii(2);
            token
        } else {
            self.read_delim()
        }
    }

    fn read_whitespace(&mut self) -> Token {
        loop {
            self.cursor.consume_whitespace();
            if self.cursor.is_eof() || !is_whitespace(self.cursor.current()) {
                break;
            }
        }
        Token::Whitespace
    }

    fn read_comment(&mut self) -> Token {
        self.cursor.advance_ascii(2);
        if !self.cursor.skip_past(b"*/") {
            let location = self.cursor.location();
            self.syntax_error(location, "Comment not terminated at end of document.");
        }
        Token::Comment
    }

    fn read_dash(&mut self) -> Token {
        if self.cursor.remaining() == 1 {
            self.read_delim()
        } else if self.has_number() {
            self.read_numeric()
        } else if self.cursor.starts_with(b"-->") {
            self.cursor.advance_ascii(3);
            Token::Cdc
        } else if self.has_identifier_at(0) {
            self.read_ident_like()
        } else {
            self.read_delim()
        }
    }

    fn read_hash(&mut self) -> Token {
        self.cursor.advance_ascii(1);
        if self.cursor.is_eof()
            || !(is_name(self.cursor.current()) || self.is_valid_escape_at(0))
        {
            return Token::Delim('#');
        }
        if self.has_identifier_at(0) {
            Token::HashId(self.read_name())
        } else {
            Token::HashUnrestricted(self.read_name())
        }
    }

    fn read_at_keyword(&mut self) -> Token {
        self.cursor.advance_ascii(1);
        if self.has_identifier_at(0) {
            Token::AtKeyword(self.read_name())
        } else {
            Token::Delim('@')
        }
    }

    // ─── Strings and escapes ───

    fn read_string(&mut self) -> Token {
        let quote = self.cursor.current();
        self.cursor.advance_ascii(1);
        let mut value = String::new();

        while !self.cursor.is_eof() {
            let b = self.cursor.current();
            if b == quote {
                self.cursor.advance_ascii(1);
                break;
            } else if b == b'\\' {
                if self.cursor.remaining() == 1 {
                    self.cursor.advance_ascii(1);
                    break;
                } else if is_newline(self.cursor.peek()) {
                    self.cursor.advance_ascii(1);
                    self.cursor.consume_newline();
                } else {
                    value.push(self.read_escape());
                }
            } else if is_newline(b) {
                let location = self.cursor.location();
                self.syntax_error(location, "Newlines inside strings must be escaped");
                return Token::BadString;
            } else {
                value.push(self.cursor.consume_char());
            }
        }

        Token::String(value)
    }

    /// Decode the escape starting at the current `\`.
    ///
    /// # Contract
    ///
    /// The cursor is on a valid escape (see `is_valid_escape_at`).
    fn read_escape(&mut self) -> char {
        self.cursor.advance_ascii(1);

        let mut value: u32 = 0;
        let mut digits = 0;
        while digits < 6 {
            let Some(digit) = hex_value(self.cursor.current()) else {
                break;
            };
            value = value * 16 + digit;
            self.cursor.advance_ascii(1);
            digits += 1;
        }

        if digits == 0 {
            if self.cursor.is_eof() {
                return char::REPLACEMENT_CHARACTER;
            }
            return match self.cursor.consume_char() {
                '\0' => char::REPLACEMENT_CHARACTER,
                c => c,
            };
        }

        if is_whitespace(self.cursor.current()) {
            self.cursor.consume_whitespace();
        }

        match value {
            0 => char::REPLACEMENT_CHARACTER,
            v => char::from_u32(v).unwrap_or(char::REPLACEMENT_CHARACTER),
        }
    }

    // ─── Names, identifiers, URLs ───

    fn read_name(&mut self) -> String {
        let mut name = String::new();
        loop {
            let b = self.cursor.current();
            if b == b'\\' && !self.cursor.is_eof() {
                if self.is_valid_escape_at(0) {
                    name.push(self.read_escape());
                } else {
                    // `\` + newline folds into the name without contributing.
                    self.cursor.advance_ascii(1);
                    self.cursor.consume_newline();
                }
            } else if is_name(b) {
                name.push(self.cursor.consume_char());
            } else {
                break;
            }
        }
        name
    }

    fn read_ident_like(&mut self) -> Token {
        let name = self.read_name();

        if self.cursor.current() != b'(' {
            return Token::Ident(name);
        }
        self.cursor.advance_ascii(1);

        if name.eq_ignore_ascii_case("url") {
            let mut i = 0;
            while is_whitespace(self.cursor.byte_at(i)) {
                i += 1;
            }
            if !matches!(self.cursor.byte_at(i), b'"' | b'\'') {
                return self.read_url();
            }
        }

        Token::Function(name)
    }

    /// Unquoted `url(...)` body, after the opening parenthesis.
    fn read_url(&mut self) -> Token {
        let mut url = String::new();

        while !self.cursor.is_eof() && is_whitespace(self.cursor.current()) {
            self.cursor.consume_whitespace();
        }

        while !self.cursor.is_eof() {
            let b = self.cursor.current();
            if b == b')' {
                self.cursor.advance_ascii(1);
                break;
            } else if is_whitespace(b) {
                while !self.cursor.is_eof() && is_whitespace(self.cursor.current()) {
                    self.cursor.consume_whitespace();
                }
                if self.cursor.is_eof() {
                    break;
                }
                if self.cursor.current() == b')' {
                    self.cursor.advance_ascii(1);
                    break;
                }
                return self.bad_url("Whitespace only allowed at start and end of url".into());
            } else if is_non_printable(b) {
                return self.bad_url(format!("Nonprintable character 0x{b:02X} in url"));
            } else if matches!(b, b'"' | b'\'' | b'(') {
                return self.bad_url(format!("Invalid character {} in url", char::from(b)));
            } else if self.is_valid_escape_at(0) {
                url.push(self.read_escape());
            } else if b == b'\\' {
                return self.bad_url("Newline may not follow '\\' escape character".into());
            } else {
                url.push(self.cursor.consume_char());
            }
        }

        Token::Url(url)
    }

    /// Report `message` at the current position, then skip the rest of the
    /// URL through the next unescaped `)`.
    fn bad_url(&mut self, message: String) -> Token {
        let location = self.cursor.location();
        while !self.cursor.is_eof() && self.cursor.current() != b')' {
            if self.is_valid_escape_at(0) {
                self.read_escape();
            } else {
                self.cursor.consume_char();
            }
        }
        if !self.cursor.is_eof() {
            self.cursor.advance_ascii(1);
        }
        self.syntax_error(location, message);
        Token::BadUrl
    }
}

#[cfg(test)]
mod tests;
