//! Typed consumers.
//!
//! Each looks at the first significant token and consumes it only when it
//! has the expected shape. The `consume_*` methods that return text report
//! a syntax error on a mismatch; the numeric ones and the `try_*` family
//! fail silently so callers can try alternatives.

use vellum_lexer::{Token, TokenTag};

use super::Parser;

impl Parser<'_> {
    /// Take ownership of a lookahead that `get_token` just showed.
    fn take_token(&mut self) -> Token {
        debug_assert!(self.token.is_preserved() && !self.blocks.masks(&self.token));
        std::mem::take(&mut self.token)
    }

    /// Consume the first significant token if it has tag `tag`.
    ///
    /// `tag` must not be a block opener.
    pub fn consume_if(&mut self, tag: TokenTag) -> bool {
        if self.has_token(tag) {
            self.consume_token();
            true
        } else {
            false
        }
    }

    /// An identifier equal to `name`, ignoring ASCII case.
    pub fn try_ident(&mut self, name: &str) -> bool {
        if self.has_ident(name) {
            self.consume_token();
            true
        } else {
            false
        }
    }

    /// An at-keyword named `name`, ignoring ASCII case.
    pub fn try_at_keyword(&mut self, name: &str) -> bool {
        let hit = matches!(self.get_token(), Token::AtKeyword(keyword) if keyword.eq_ignore_ascii_case(name));
        if hit {
            self.consume_token();
        }
        hit
    }

    pub fn try_delim(&mut self, delim: char) -> bool {
        if self.get_token().is_delim(delim) {
            self.consume_token();
            true
        } else {
            false
        }
    }

    /// Value of one of the four plain numeric kinds.
    ///
    /// `calc()` and other math functions are not evaluated.
    pub fn consume_number(&mut self) -> Option<f64> {
        let token = self.get_token();
        let value = if token.tag().is_number() {
            token.number()
        } else {
            None
        };
        if value.is_some() {
            self.consume_token();
        }
        value
    }

    pub fn consume_percentage(&mut self) -> Option<f64> {
        let token = self.get_token();
        let value = if token.is(TokenTag::Percentage) {
            token.number()
        } else {
            None
        };
        if value.is_some() {
            self.consume_token();
        }
        value
    }

    /// A signed or signless integer that fits an `i32`.
    pub fn consume_integer(&mut self) -> Option<i32> {
        let token = self.get_token();
        let value = if token.tag().is_integer() {
            token.number()
        } else {
            None
        };
        let Some(value) = value else {
            self.error_syntax("Expected an integer");
            return None;
        };

        if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&value) {
            self.error_value("Integer out of range");
            return None;
        }

        self.consume_token();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "integer tokens carry no fraction and the range was checked"
        )]
        let value = value as i32;
        Some(value)
    }

    pub fn consume_ident(&mut self) -> Option<String> {
        if !self.has_token(TokenTag::Ident) {
            self.error_syntax("Expected an identifier");
            return None;
        }
        match self.take_token() {
            Token::Ident(name) => Some(name),
            _ => None,
        }
    }

    pub fn consume_string(&mut self) -> Option<String> {
        if !self.has_token(TokenTag::String) {
            self.error_syntax("Expected a string");
            return None;
        }
        match self.take_token() {
            Token::String(text) => Some(text),
            _ => None,
        }
    }

    /// A URL token, or `url()` with one string argument.
    pub fn consume_url(&mut self) -> Option<String> {
        if self.has_token(TokenTag::Url) {
            return match self.take_token() {
                Token::Url(url) => Some(url),
                _ => None,
            };
        }

        if self.has_function("url") {
            let mut url = None;
            let parsed = self.consume_function(1, 1, |parser, _| match parser.consume_string() {
                Some(text) => {
                    url = Some(text);
                    1
                }
                None => 0,
            });
            return if parsed { url } else { None };
        }

        self.error_syntax("Expected a URL");
        None
    }

    /// Parse a function call with between `min_args` and `max_args`
    /// comma-separated arguments.
    ///
    /// `parse_arg(parser, index)` parses the argument(s) starting at
    /// `index` and returns how many it consumed; 0 means it failed (and
    /// has reported why). The function's block is always closed before
    /// returning, so on failure the parser is positioned after the `)`.
    pub fn consume_function<F>(&mut self, min_args: usize, max_args: usize, mut parse_arg: F) -> bool
    where
        F: FnMut(&mut Self, usize) -> usize,
    {
        let name = match self.get_token() {
            Token::Function(name) => Some(name.clone()),
            _ => None,
        };
        let Some(name) = name else {
            self.error_syntax("Expected a function");
            return false;
        };

        self.start_block();

        let mut args = 0;
        let parsed = loop {
            let consumed = parse_arg(self, args);
            if consumed == 0 {
                break false;
            }
            args += consumed;

            match self.get_token().tag() {
                TokenTag::Eof => {
                    if args < min_args {
                        self.error_syntax(format!(
                            "{name}() requires at least {min_args} arguments"
                        ));
                        break false;
                    }
                    break true;
                }
                TokenTag::Comma => {
                    if args >= max_args {
                        self.error_syntax(format!("Expected ')' at end of {name}()"));
                        break false;
                    }
                    self.consume_token();
                }
                _ => {
                    self.error_syntax(format!("Unexpected data at end of {name}() argument"));
                    break false;
                }
            }
        };

        self.end_block();
        parsed
    }
}
