//! Open-block bookkeeping.

use smallvec::SmallVec;
use vellum_lexer::{Location, Token, TokenTag};

/// One open block.
///
/// Unused tag slots hold [`TokenTag::Eof`], which never matches a real
/// token the parser still has to mask.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Tag that closes this block.
    pub end: TokenTag,
    /// For semicolon blocks, the enclosing block's closer: reaching it ends
    /// the declaration early.
    pub inherited_end: TokenTag,
    /// Block opener that may replace the `;` of a semicolon block, such as
    /// the `{` of an at-rule.
    pub alternative: TokenTag,
    /// Where the block started.
    pub start: Location,
}

impl Block {
    /// A bracket or function block closed by `end`.
    pub fn new(end: TokenTag, start: Location) -> Self {
        Block {
            end,
            inherited_end: TokenTag::Eof,
            alternative: TokenTag::Eof,
            start,
        }
    }

    /// Whether `tag` ends this block's contents.
    #[inline]
    pub fn is_boundary(&self, tag: TokenTag) -> bool {
        tag == self.end || tag == self.inherited_end || tag == self.alternative
    }
}

/// Stack of open blocks, innermost last. Depth is unbounded.
#[derive(Clone, Debug, Default)]
pub struct BlockStack {
    blocks: SmallVec<[Block; 8]>,
}

impl BlockStack {
    pub fn new() -> Self {
        BlockStack::default()
    }

    #[inline]
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Innermost open block.
    #[inline]
    pub fn top(&self) -> Option<&Block> {
        self.blocks.last()
    }

    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut Block> {
        self.blocks.last_mut()
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Block> {
        self.blocks.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether the parser must show `lookahead` as end of input.
    ///
    /// True when a block is open and `lookahead` closes the innermost one:
    /// its own closer, the closer it inherited from its parent, or its
    /// alternative opener. Only the innermost block counts, so a `)` inside
    /// `{ ( ... ) }` closes the parens and nothing else.
    ///
    /// This is the only place masking is decided. Every read the parser
    /// hands out goes through it.
    #[inline]
    pub fn masks(&self, lookahead: &Token) -> bool {
        self.top()
            .is_some_and(|block| block.is_boundary(lookahead.tag()))
    }
}
