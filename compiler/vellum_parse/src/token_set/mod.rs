//! Sets of token tags for resynchronization.
//!
//! A bitset over [`TokenTag`] discriminants, so membership is one AND.

use std::fmt;

use vellum_lexer::{Token, TokenTag};

const _: () = assert!(
    TokenTag::COUNT <= 64,
    "TokenSet uses a u64 bitset; every tag index must be below 64"
);

/// A set of token tags.
///
/// ```text
/// const DECLARATION_END: TokenSet = TokenSet::new()
///     .with(TokenTag::Semicolon)
///     .with(TokenTag::CloseCurly);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        TokenSet(0)
    }

    #[inline]
    pub const fn single(tag: TokenTag) -> Self {
        TokenSet(1_u64 << tag as u8)
    }

    /// Add a tag (builder form, usable in `const`).
    #[inline]
    #[must_use]
    pub const fn with(self, tag: TokenTag) -> Self {
        TokenSet(self.0 | (1_u64 << tag as u8))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        TokenSet(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, tag: TokenTag) -> bool {
        self.0 & (1_u64 << tag as u8) != 0
    }

    /// Whether `token`'s tag is in the set.
    #[inline]
    pub fn matches(self, token: &Token) -> bool {
        self.contains(token.tag())
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }
}

impl FromIterator<TokenTag> for TokenSet {
    fn from_iter<I: IntoIterator<Item = TokenTag>>(iter: I) -> Self {
        iter.into_iter().fold(TokenSet::new(), TokenSet::with)
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenSet({:#x})", self.0)
    }
}

#[cfg(test)]
mod tests;
