//! Serializing tokens back to CSS text.
//!
//! Payloads are escaped so that tokenizing the printed text of a single
//! token yields the same tag and payload again. Malformed tokens print a
//! fixed placeholder instead.

use std::fmt::{self, Write};

use super::Token;

fn write_hex_escape(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    // The trailing space terminates the escape even if a hex digit follows.
    write!(f, "\\{:x} ", u32::from(c))
}

/// Characters that may appear unescaped anywhere in a name.
fn is_plain_name_char(c: char) -> bool {
    !c.is_ascii() || c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn is_control(c: char) -> bool {
    matches!(c, '\u{1}'..='\u{1f}' | '\u{7f}')
}

/// Write the characters of a name with no position-dependent rules.
fn write_name_char(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    if is_control(c) {
        write_hex_escape(f, c)
    } else if is_plain_name_char(c) {
        f.write_char(c)
    } else {
        f.write_char('\\')?;
        f.write_char(c)
    }
}

/// Write `name` so that it is read back as an identifier.
fn write_ident(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    let starts_with_dash = name.starts_with('-');
    if name == "-" {
        return f.write_str("\\-");
    }
    for (i, c) in name.chars().enumerate() {
        let digit = c.is_ascii_digit();
        if (i == 0 && digit) || (i == 1 && digit && starts_with_dash) {
            write_hex_escape(f, c)?;
        } else {
            write_name_char(f, c)?;
        }
    }
    Ok(())
}

/// Write a name that may start with anything a name character may be.
fn write_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    name.chars().try_for_each(|c| write_name_char(f, c))
}

fn write_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' | '\\' => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            '\n' | '\r' | '\u{c}' => write_hex_escape(f, c)?,
            _ => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

fn write_url(f: &mut fmt::Formatter<'_>, url: &str) -> fmt::Result {
    f.write_str("url(")?;
    for c in url.chars() {
        if c.is_ascii_whitespace()
            || is_control(c)
            || matches!(c, '"' | '\'' | '(' | ')' | '\\')
        {
            write_hex_escape(f, c)?;
        } else {
            f.write_char(c)?;
        }
    }
    f.write_char(')')
}

/// Fractional digits the tokenizer accumulates before it stops gaining
/// precision.
const MAX_FRACTION_DIGITS: usize = 18;

/// Write a numeric value. `signed` kinds always show their sign; `float`
/// kinds always show a decimal point or an exponent so they are not read
/// back as integers.
///
/// Values whose decimal form needs more fractional digits than the
/// tokenizer keeps are written in exponent form (`1e-20`).
fn write_number(f: &mut fmt::Formatter<'_>, value: f64, signed: bool, float: bool) -> fmt::Result {
    if signed && !value.is_sign_negative() {
        f.write_char('+')?;
    }
    let text = value.to_string();
    let fraction_digits = text.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    if fraction_digits > MAX_FRACTION_DIGITS {
        return write!(f, "{value:e}");
    }
    f.write_str(&text)?;
    if float && value.is_finite() && !text.contains('.') {
        f.write_str(".0")?;
    }
    Ok(())
}

/// Write a dimension unit directly after its number.
///
/// A unit like `e3` would be read back as an exponent, so a leading `e` in
/// that position is escaped.
fn write_unit(f: &mut fmt::Formatter<'_>, unit: &str) -> fmt::Result {
    let mut chars = unit.chars();
    if let Some(first @ ('e' | 'E')) = chars.next() {
        let rest = chars.as_str().as_bytes();
        let looks_like_exponent = match rest {
            [d, ..] if d.is_ascii_digit() => true,
            [b'+' | b'-', d, ..] if d.is_ascii_digit() => true,
            _ => false,
        };
        if looks_like_exponent {
            write_hex_escape(f, first)?;
            return write_name(f, chars.as_str());
        }
    }
    write_ident(f, unit)
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => Ok(()),
            Token::Whitespace => f.write_char(' '),
            Token::String(s) => write_string(f, s),
            Token::Ident(name) => write_ident(f, name),
            Token::Function(name) => {
                write_ident(f, name)?;
                f.write_char('(')
            }
            Token::AtKeyword(name) => {
                f.write_char('@')?;
                write_ident(f, name)
            }
            Token::HashUnrestricted(name) => {
                f.write_char('#')?;
                write_name(f, name)
            }
            Token::HashId(name) => {
                f.write_char('#')?;
                write_ident(f, name)
            }
            Token::Url(url) => write_url(f, url),
            Token::Delim(c) => f.write_char(*c),
            Token::OpenParens => f.write_char('('),
            Token::CloseParens => f.write_char(')'),
            Token::OpenSquare => f.write_char('['),
            Token::CloseSquare => f.write_char(']'),
            Token::OpenCurly => f.write_char('{'),
            Token::CloseCurly => f.write_char('}'),
            Token::Comma => f.write_char(','),
            Token::Colon => f.write_char(':'),
            Token::Semicolon => f.write_char(';'),
            Token::Cdo => f.write_str("<!--"),
            Token::Cdc => f.write_str("-->"),
            Token::IncludeMatch => f.write_str("~="),
            Token::DashMatch => f.write_str("|="),
            Token::PrefixMatch => f.write_str("^="),
            Token::SuffixMatch => f.write_str("$="),
            Token::SubstringMatch => f.write_str("*="),
            Token::Column => f.write_str("||"),
            Token::BadString => f.write_str("\"\n"),
            Token::BadUrl => f.write_str("url(bad url)"),
            Token::Comment => f.write_str("/* comment */"),
            Token::SignedInteger(v) => write_number(f, *v, true, false),
            Token::SignlessInteger(v) => write_number(f, *v, false, false),
            Token::SignedNumber(v) => write_number(f, *v, true, true),
            Token::SignlessNumber(v) => write_number(f, *v, false, true),
            Token::Percentage(v) => {
                write_number(f, *v, false, false)?;
                f.write_char('%')
            }
            Token::SignedIntegerDimension { value, unit } => {
                write_number(f, *value, true, false)?;
                write_unit(f, unit)
            }
            Token::SignlessIntegerDimension { value, unit } => {
                write_number(f, *value, false, false)?;
                write_unit(f, unit)
            }
            Token::Dimension { value, unit } => {
                write_number(f, *value, false, true)?;
                write_unit(f, unit)
            }
        }
    }
}
