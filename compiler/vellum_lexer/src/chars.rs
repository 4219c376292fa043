//! Byte classification for the CSS token grammar.
//!
//! Every predicate works on a single byte. Bytes `>= 0x80` are lead or
//! continuation bytes of non-ASCII code points and count as name characters.
//! `0x00` (what the cursor returns past the end) is in none of the classes
//! except [`is_non_printable`].

/// `\n`, `\r` or form feed.
#[inline]
pub fn is_newline(b: u8) -> bool {
    matches!(b, b'\n' | b'\r' | 0x0C)
}

/// Newline, tab or space.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    is_newline(b) || b == b'\t' || b == b' '
}

#[inline]
pub fn is_name_start(b: u8) -> bool {
    b >= 0x80 || b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
pub fn is_name(b: u8) -> bool {
    is_name_start(b) || b.is_ascii_digit() || b == b'-'
}

/// Control characters that may not appear unescaped inside `url()`.
#[inline]
pub fn is_non_printable(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E | 0x1F | 0x7F)
}

/// Value of an ASCII hex digit.
#[inline]
pub fn hex_value(b: u8) -> Option<u32> {
    char::from(b).to_digit(16)
}

/// Number of bytes in the UTF-8 sequence introduced by `byte`.
///
/// Continuation and invalid lead bytes report 1 so a decoder always makes
/// progress.
#[inline]
pub fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
