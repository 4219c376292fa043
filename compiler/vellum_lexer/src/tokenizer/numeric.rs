//! Numeric literals: numbers, percentages and dimensions.
//!
//! The value is `sign * (integer + fractional / scale) * 10^exponent`.
//! Fractional digits accumulate into an `i64` and stop contributing once
//! `scale` would exceed `i64::MAX / 10` (18 digits). Later digits are still
//! consumed, they just no longer change the value.

use crate::Token;

use super::Tokenizer;

/// Largest fractional scale that still accumulates another digit.
const FRACTIONAL_SCALE_LIMIT: i64 = i64::MAX / 10;

impl Tokenizer<'_> {
    /// Read a numeric token. The cursor is where `has_number` succeeded, or
    /// on a digit.
    pub(super) fn read_numeric(&mut self) -> Token {
        let cursor = &self.cursor;
        let digit_at = |i: usize| match cursor.byte_at(i) {
            b @ b'0'..=b'9' => Some(b - b'0'),
            _ => None,
        };

        let mut i = 0;
        let (has_sign, sign) = match cursor.current() {
            b'-' => (true, -1.0),
            b'+' => (true, 1.0),
            _ => (false, 1.0),
        };
        if has_sign {
            i += 1;
        }

        let mut integer = 0.0_f64;
        while let Some(d) = digit_at(i) {
            integer = integer * 10.0 + f64::from(d);
            i += 1;
        }

        let mut is_int = true;
        let mut fractional: i64 = 0;
        let mut scale: i64 = 1;
        if cursor.byte_at(i) == b'.' && digit_at(i + 1).is_some() {
            is_int = false;
            i += 1;
            while let Some(d) = digit_at(i) {
                if scale < FRACTIONAL_SCALE_LIMIT {
                    fractional = fractional * 10 + i64::from(d);
                    scale *= 10;
                }
                i += 1;
            }
        }

        let mut exponent: i32 = 0;
        if matches!(cursor.byte_at(i), b'e' | b'E') {
            let (sign_len, exponent_sign) = match cursor.byte_at(i + 1) {
                b'-' => (1, -1),
                b'+' => (1, 1),
                _ => (0, 1),
            };
            if digit_at(i + 1 + sign_len).is_some() {
                is_int = false;
                i += 1 + sign_len;
                while let Some(d) = digit_at(i) {
                    exponent = exponent.saturating_mul(10).saturating_add(i32::from(d));
                    i += 1;
                }
                exponent *= exponent_sign;
            }
        }

        self.cursor.advance_ascii(i);

        #[allow(
            clippy::cast_precision_loss,
            reason = "fractional and scale are below 10^18; the division is the precision we keep"
        )]
        let fraction = fractional as f64 / scale as f64;
        let value = sign * (integer + fraction) * 10.0_f64.powi(exponent);

        if self.has_identifier_at(0) {
            let unit = self.read_name();
            return match (is_int, has_sign) {
                (true, true) => Token::SignedIntegerDimension { value, unit },
                (true, false) => Token::SignlessIntegerDimension { value, unit },
                (false, _) => Token::Dimension { value, unit },
            };
        }

        if !self.cursor.is_eof() && self.cursor.current() == b'%' {
            self.cursor.advance_ascii(1);
            return Token::Percentage(value);
        }

        match (is_int, has_sign) {
            (true, true) => Token::SignedInteger(value),
            (true, false) => Token::SignlessInteger(value),
            (false, true) => Token::SignedNumber(value),
            (false, false) => Token::SignlessNumber(value),
        }
    }
}
