//! Source positions.
//!
//! A [`Location`] is a snapshot: copying it out of a tokenizer freezes the
//! position, and the tokenizer keeps advancing its own copy.

use std::fmt;

/// Position inside a scanned buffer.
///
/// All counters are zero-based. `line_bytes` and `line_chars` count from
/// the start of the current line and reset on every newline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// Absolute byte offset.
    pub bytes: usize,
    /// Absolute code point offset.
    pub chars: usize,
    /// Number of newlines seen so far.
    pub lines: usize,
    /// Byte offset within the current line.
    pub line_bytes: usize,
    /// Code point offset within the current line.
    pub line_chars: usize,
}

impl Location {
    /// The start of a buffer.
    pub const fn origin() -> Self {
        Location {
            bytes: 0,
            chars: 0,
            lines: 0,
            line_bytes: 0,
            line_chars: 0,
        }
    }

    /// Move past `bytes` bytes forming `chars` code points on the same line.
    #[inline]
    pub fn advance(&mut self, bytes: usize, chars: usize) {
        self.bytes += bytes;
        self.chars += chars;
        self.line_bytes += bytes;
        self.line_chars += chars;
    }

    /// Move past one newline. `\r\n` counts as a single newline of two bytes.
    #[inline]
    pub fn advance_newline(&mut self, is_crlf: bool) {
        let width = if is_crlf { 2 } else { 1 };
        self.bytes += width;
        self.chars += width;
        self.lines += 1;
        self.line_bytes = 0;
        self.line_chars = 0;
    }

    /// One-based line number, for display.
    #[inline]
    pub fn line(&self) -> usize {
        self.lines + 1
    }

    /// One-based column in code points, for display.
    #[inline]
    pub fn column(&self) -> usize {
        self.line_chars + 1
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line(), self.column())
    }
}

#[cfg(test)]
mod tests;
