//! Byte cursor with location tracking.
//!
//! The cursor owns a handle to the [`SourceBuffer`] and moves forward only.
//! Every consuming method keeps the [`Location`] in sync with the byte
//! position, so the tokenizer never touches the location directly.
//!
//! Lookahead past the end of the buffer reads as `0x00`. Use
//! [`is_eof()`](Cursor::is_eof) to tell a real NUL byte from the end.

use vellum_diagnostic::Location;

use crate::chars::{is_newline, utf8_char_width};
use crate::SourceBuffer;

/// Forward-only reader over a [`SourceBuffer`].
#[derive(Clone, Debug)]
pub struct Cursor {
    buf: SourceBuffer,
    pos: usize,
    location: Location,
}

impl Cursor {
    /// Create a cursor at the start of `buf`.
    pub fn new(buf: SourceBuffer) -> Self {
        Cursor {
            buf,
            pos: 0,
            location: Location::origin(),
        }
    }

    /// Where the next byte is.
    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Byte `offset` positions ahead, or `0x00` past the end.
    #[inline]
    pub fn byte_at(&self, offset: usize) -> u8 {
        self.buf
            .as_bytes()
            .get(self.pos + offset)
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(0)
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(1)
    }

    /// Whether the unread input begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.buf.as_bytes()[self.pos.min(self.buf.len())..].starts_with(prefix)
    }

    /// Move past `n` single-byte characters.
    ///
    /// # Contract
    ///
    /// The skipped bytes must be ASCII and must not contain a newline.
    #[inline]
    pub fn advance_ascii(&mut self, n: usize) {
        debug_assert!(n <= self.remaining(), "advance past end of input");
        debug_assert!(
            self.buf.as_bytes()[self.pos..self.pos + n]
                .iter()
                .all(|&b| b.is_ascii() && !is_newline(b)),
            "advance_ascii over a newline or non-ASCII byte"
        );
        self.pos += n;
        self.location.advance(n, n);
    }

    /// Move past one newline. `\r\n` is consumed as a unit.
    pub fn consume_newline(&mut self) {
        debug_assert!(is_newline(self.current()), "consume_newline on non-newline");
        let is_crlf = self.current() == b'\r' && self.peek() == b'\n';
        self.pos += if is_crlf { 2 } else { 1 };
        self.location.advance_newline(is_crlf);
    }

    /// Move past one whitespace character.
    #[inline]
    pub fn consume_whitespace(&mut self) {
        if is_newline(self.current()) {
            self.consume_newline();
        } else {
            self.advance_ascii(1);
        }
    }

    /// Decode and move past one code point.
    ///
    /// Newlines go through [`consume_newline`](Self::consume_newline). An
    /// invalid or truncated UTF-8 sequence decodes to U+FFFD and consumes a
    /// single byte. At end of input nothing is consumed and U+FFFD is
    /// returned.
    pub fn consume_char(&mut self) -> char {
        if self.is_eof() {
            return char::REPLACEMENT_CHARACTER;
        }

        let lead = self.current();
        if is_newline(lead) {
            self.consume_newline();
            return char::from(lead);
        }

        let rest = &self.buf.as_bytes()[self.pos..];
        let width = utf8_char_width(lead).min(rest.len());
        let (c, width) = match std::str::from_utf8(&rest[..width])
            .ok()
            .and_then(|s| s.chars().next())
        {
            Some(c) => (c, width),
            None => (char::REPLACEMENT_CHARACTER, 1),
        };

        self.pos += width;
        self.location.advance(width, 1);
        c
    }

    /// Consume characters until the byte position reaches `end`.
    pub fn advance_to(&mut self, end: usize) {
        let end = end.min(self.buf.len());
        while self.pos < end {
            self.consume_char();
        }
    }

    /// Consume through the next occurrence of `needle`.
    ///
    /// Returns `false` and stops at end of input if `needle` never occurs.
    pub fn skip_past(&mut self, needle: &[u8]) -> bool {
        let rest = &self.buf.as_bytes()[self.pos.min(self.buf.len())..];
        match memchr::memmem::find(rest, needle) {
            Some(offset) => {
                let end = self.pos + offset + needle.len();
                self.advance_to(end);
                true
            }
            None => {
                let end = self.buf.len();
                self.advance_to(end);
                false
            }
        }
    }
}
