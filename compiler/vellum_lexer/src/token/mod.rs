//! Token sum type.
//!
//! [`Token`] carries its payload in the variant, so only the valid payload
//! is ever reachable and owned strings are released when the token drops.
//! [`TokenTag`] is the fieldless discriminant, used for matching and for
//! the parser's block bookkeeping.

mod print;

use std::fmt;

/// One lexical unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Token {
    /// End of input. Also the value of a cleared token.
    #[default]
    Eof,
    Whitespace,

    // ─── String payloads ───
    String(String),
    Ident(String),
    Function(String),
    AtKeyword(String),
    HashUnrestricted(String),
    HashId(String),
    Url(String),

    /// One code point not claimed by any other production.
    Delim(char),

    // ─── Punctuation ───
    OpenParens,
    CloseParens,
    OpenSquare,
    CloseSquare,
    OpenCurly,
    CloseCurly,
    Comma,
    Colon,
    Semicolon,
    /// `<!--`
    Cdo,
    /// `-->`
    Cdc,
    /// `~=`
    IncludeMatch,
    /// `|=`
    DashMatch,
    /// `^=`
    PrefixMatch,
    /// `$=`
    SuffixMatch,
    /// `*=`
    SubstringMatch,
    /// `||`
    Column,

    // ─── Recovery ───
    BadString,
    BadUrl,
    Comment,

    // ─── Numbers ───
    SignedInteger(f64),
    SignlessInteger(f64),
    SignedNumber(f64),
    SignlessNumber(f64),
    Percentage(f64),
    SignedIntegerDimension { value: f64, unit: String },
    SignlessIntegerDimension { value: f64, unit: String },
    Dimension { value: f64, unit: String },
}

/// Discriminant of a [`Token`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenTag {
    Eof,
    Whitespace,
    String,
    Ident,
    Function,
    AtKeyword,
    HashUnrestricted,
    HashId,
    Url,
    Delim,
    OpenParens,
    CloseParens,
    OpenSquare,
    CloseSquare,
    OpenCurly,
    CloseCurly,
    Comma,
    Colon,
    Semicolon,
    Cdo,
    Cdc,
    IncludeMatch,
    DashMatch,
    PrefixMatch,
    SuffixMatch,
    SubstringMatch,
    Column,
    BadString,
    BadUrl,
    Comment,
    SignedInteger,
    SignlessInteger,
    SignedNumber,
    SignlessNumber,
    Percentage,
    SignedIntegerDimension,
    SignlessIntegerDimension,
    Dimension,
}

impl TokenTag {
    /// Number of tags. Every tag's `as u8` is below this.
    pub const COUNT: usize = TokenTag::Dimension as usize + 1;

    /// The tag that closes a block opened by this tag.
    ///
    /// `None` for preserved tags, which never open a block.
    pub const fn closing(self) -> Option<TokenTag> {
        match self {
            TokenTag::Function | TokenTag::OpenParens => Some(TokenTag::CloseParens),
            TokenTag::OpenSquare => Some(TokenTag::CloseSquare),
            TokenTag::OpenCurly => Some(TokenTag::CloseCurly),
            _ => None,
        }
    }

    /// Whether a token of this tag is a complete unit on its own.
    pub const fn is_preserved(self) -> bool {
        self.closing().is_none()
    }

    /// Whether the token's extent is fixed once its first bytes are seen,
    /// independent of anything that follows.
    pub const fn is_finite(self) -> bool {
        matches!(
            self,
            TokenTag::Eof
                | TokenTag::String
                | TokenTag::Function
                | TokenTag::Url
                | TokenTag::Percentage
                | TokenTag::OpenParens
                | TokenTag::CloseParens
                | TokenTag::OpenSquare
                | TokenTag::CloseSquare
                | TokenTag::OpenCurly
                | TokenTag::CloseCurly
                | TokenTag::Comma
                | TokenTag::Colon
                | TokenTag::Semicolon
                | TokenTag::Cdc
                | TokenTag::Cdo
                | TokenTag::IncludeMatch
                | TokenTag::DashMatch
                | TokenTag::PrefixMatch
                | TokenTag::SuffixMatch
                | TokenTag::SubstringMatch
                | TokenTag::Column
                | TokenTag::Comment
        )
    }

    /// One of the four plain numeric kinds.
    pub const fn is_number(self) -> bool {
        matches!(
            self,
            TokenTag::SignedInteger
                | TokenTag::SignlessInteger
                | TokenTag::SignedNumber
                | TokenTag::SignlessNumber
        )
    }

    pub const fn is_integer(self) -> bool {
        matches!(self, TokenTag::SignedInteger | TokenTag::SignlessInteger)
    }

    pub const fn is_dimension(self) -> bool {
        matches!(
            self,
            TokenTag::SignedIntegerDimension
                | TokenTag::SignlessIntegerDimension
                | TokenTag::Dimension
        )
    }

    /// Human-readable name, used in diagnostics and the `lex` command.
    pub const fn name(self) -> &'static str {
        match self {
            TokenTag::Eof => "end of input",
            TokenTag::Whitespace => "whitespace",
            TokenTag::String => "string",
            TokenTag::Ident => "identifier",
            TokenTag::Function => "function",
            TokenTag::AtKeyword => "at-keyword",
            TokenTag::HashUnrestricted => "hash",
            TokenTag::HashId => "id-hash",
            TokenTag::Url => "url",
            TokenTag::Delim => "delimiter",
            TokenTag::OpenParens => "'('",
            TokenTag::CloseParens => "')'",
            TokenTag::OpenSquare => "'['",
            TokenTag::CloseSquare => "']'",
            TokenTag::OpenCurly => "'{'",
            TokenTag::CloseCurly => "'}'",
            TokenTag::Comma => "','",
            TokenTag::Colon => "':'",
            TokenTag::Semicolon => "';'",
            TokenTag::Cdo => "'<!--'",
            TokenTag::Cdc => "'-->'",
            TokenTag::IncludeMatch => "'~='",
            TokenTag::DashMatch => "'|='",
            TokenTag::PrefixMatch => "'^='",
            TokenTag::SuffixMatch => "'$='",
            TokenTag::SubstringMatch => "'*='",
            TokenTag::Column => "'||'",
            TokenTag::BadString => "bad string",
            TokenTag::BadUrl => "bad url",
            TokenTag::Comment => "comment",
            TokenTag::SignedInteger => "signed integer",
            TokenTag::SignlessInteger => "integer",
            TokenTag::SignedNumber => "signed number",
            TokenTag::SignlessNumber => "number",
            TokenTag::Percentage => "percentage",
            TokenTag::SignedIntegerDimension => "signed integer dimension",
            TokenTag::SignlessIntegerDimension => "integer dimension",
            TokenTag::Dimension => "dimension",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Token {
    pub fn tag(&self) -> TokenTag {
        match self {
            Token::Eof => TokenTag::Eof,
            Token::Whitespace => TokenTag::Whitespace,
            Token::String(_) => TokenTag::String,
            Token::Ident(_) => TokenTag::Ident,
            Token::Function(_) => TokenTag::Function,
            Token::AtKeyword(_) => TokenTag::AtKeyword,
            Token::HashUnrestricted(_) => TokenTag::HashUnrestricted,
            Token::HashId(_) => TokenTag::HashId,
            Token::Url(_) => TokenTag::Url,
            Token::Delim(_) => TokenTag::Delim,
            Token::OpenParens => TokenTag::OpenParens,
            Token::CloseParens => TokenTag::CloseParens,
            Token::OpenSquare => TokenTag::OpenSquare,
            Token::CloseSquare => TokenTag::CloseSquare,
            Token::OpenCurly => TokenTag::OpenCurly,
            Token::CloseCurly => TokenTag::CloseCurly,
            Token::Comma => TokenTag::Comma,
            Token::Colon => TokenTag::Colon,
            Token::Semicolon => TokenTag::Semicolon,
            Token::Cdo => TokenTag::Cdo,
            Token::Cdc => TokenTag::Cdc,
            Token::IncludeMatch => TokenTag::IncludeMatch,
            Token::DashMatch => TokenTag::DashMatch,
            Token::PrefixMatch => TokenTag::PrefixMatch,
            Token::SuffixMatch => TokenTag::SuffixMatch,
            Token::SubstringMatch => TokenTag::SubstringMatch,
            Token::Column => TokenTag::Column,
            Token::BadString => TokenTag::BadString,
            Token::BadUrl => TokenTag::BadUrl,
            Token::Comment => TokenTag::Comment,
            Token::SignedInteger(_) => TokenTag::SignedInteger,
            Token::SignlessInteger(_) => TokenTag::SignlessInteger,
            Token::SignedNumber(_) => TokenTag::SignedNumber,
            Token::SignlessNumber(_) => TokenTag::SignlessNumber,
            Token::Percentage(_) => TokenTag::Percentage,
            Token::SignedIntegerDimension { .. } => TokenTag::SignedIntegerDimension,
            Token::SignlessIntegerDimension { .. } => TokenTag::SignlessIntegerDimension,
            Token::Dimension { .. } => TokenTag::Dimension,
        }
    }

    #[inline]
    pub fn is(&self, tag: TokenTag) -> bool {
        self.tag() == tag
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }

    /// See [`TokenTag::is_preserved`].
    #[inline]
    pub fn is_preserved(&self) -> bool {
        self.tag().is_preserved()
    }

    /// See [`TokenTag::closing`].
    #[inline]
    pub fn closing_tag(&self) -> Option<TokenTag> {
        self.tag().closing()
    }

    /// See [`TokenTag::is_finite`].
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.tag().is_finite()
    }

    /// An identifier equal to `name`, ignoring ASCII case.
    pub fn is_ident(&self, name: &str) -> bool {
        matches!(self, Token::Ident(s) if s.eq_ignore_ascii_case(name))
    }

    /// A function token named `name`, ignoring ASCII case.
    pub fn is_function(&self, name: &str) -> bool {
        matches!(self, Token::Function(s) if s.eq_ignore_ascii_case(name))
    }

    pub fn is_delim(&self, c: char) -> bool {
        matches!(self, Token::Delim(d) if *d == c)
    }

    /// Text payload of the string-carrying kinds.
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::String(s)
            | Token::Ident(s)
            | Token::Function(s)
            | Token::AtKeyword(s)
            | Token::HashUnrestricted(s)
            | Token::HashId(s)
            | Token::Url(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload of numbers, percentages and dimensions.
    pub fn number(&self) -> Option<f64> {
        match self {
            Token::SignedInteger(v)
            | Token::SignlessInteger(v)
            | Token::SignedNumber(v)
            | Token::SignlessNumber(v)
            | Token::Percentage(v)
            | Token::SignedIntegerDimension { value: v, .. }
            | Token::SignlessIntegerDimension { value: v, .. }
            | Token::Dimension { value: v, .. } => Some(*v),
            _ => None,
        }
    }

    /// Unit of the dimension kinds.
    pub fn unit(&self) -> Option<&str> {
        match self {
            Token::SignedIntegerDimension { unit, .. }
            | Token::SignlessIntegerDimension { unit, .. }
            | Token::Dimension { unit, .. } => Some(unit),
            _ => None,
        }
    }

    /// Reset to [`Token::Eof`], dropping any payload.
    #[inline]
    pub fn clear(&mut self) {
        *self = Token::Eof;
    }
}
