//! Opening, closing and skipping blocks.
//!
//! Skipping is iterative: [`Parser::end_block`] walks nested blocks with
//! the block stack itself, so deeply nested input cannot exhaust the call
//! stack.

use tracing::{debug, error};
use vellum_lexer::{CssError, TokenTag};

use super::Parser;
use crate::{Block, TokenSet};

impl Parser<'_> {
    /// Open the block started by the lookahead token and consume it.
    ///
    /// The lookahead must be a block opener: `(`, `[`, `{` or a function.
    pub fn start_block(&mut self) {
        self.ensure_token();

        debug_assert!(
            !self.token.is_preserved(),
            "start_block called on {:?}, which does not open a block",
            self.token
        );
        let Some(end) = self.token.closing_tag() else {
            error!(token = ?self.token, "start_block called on a token that does not open a block");
            return;
        };

        self.blocks.push(Block::new(end, self.location));
        debug!(depth = self.blocks.len(), %end, "block opened");
        self.token.clear();
    }

    /// Open a declaration-style block that ends at the next `;`.
    ///
    /// The block also ends where its parent does, and, unless
    /// `alternative` is [`TokenTag::Eof`], at a token of tag `alternative`.
    /// [`end_block_prelude`](Self::end_block_prelude) turns such a block
    /// into the block that `alternative` opens.
    pub fn start_semicolon_block(&mut self, alternative: TokenTag) {
        self.ensure_token();
        let inherited_end = self.blocks.top().map_or(TokenTag::Eof, |parent| parent.end);
        self.blocks.push(Block {
            end: TokenTag::Semicolon,
            inherited_end,
            alternative,
            start: self.location,
        });
        debug!(depth = self.blocks.len(), %alternative, "semicolon block opened");
    }

    /// Finish the prelude of a semicolon block.
    ///
    /// Skips the rest of the prelude. If it ended at the alternative
    /// opener, the block continues as the block that opener starts (for
    /// `@media x { ... }`, the `{ ... }`) and this returns `true`.
    /// Otherwise the block is left as is, ending at `;`.
    pub fn end_block_prelude(&mut self) -> bool {
        debug_assert!(!self.blocks.is_empty(), "end_block_prelude called without an open block");
        let Some(alternative) = self.blocks.top().map(|block| block.alternative) else {
            error!("end_block_prelude called without an open block");
            return false;
        };
        if alternative == TokenTag::Eof {
            return false;
        }

        self.skip_until(TokenTag::Eof);
        if !self.token.is(alternative) {
            return false;
        }

        let Some(end) = self.token.closing_tag() else {
            error!(%alternative, "alternative token does not open a block");
            return false;
        };
        if let Some(block) = self.blocks.top_mut() {
            block.end = end;
            block.inherited_end = TokenTag::Eof;
            block.alternative = TokenTag::Eof;
        }
        debug!(depth = self.blocks.len(), %end, "prelude ended, block continues");
        self.token.clear();
        true
    }

    /// Skip the rest of the innermost open block and close it.
    ///
    /// Reaching the real end of input warns "Unterminated block at end of
    /// document". A semicolon block cut short by its parent's closer warns
    /// "Expected ';' at end of block" and leaves that closer for the parent.
    /// Otherwise the closer is consumed, or, for an alternative opener, the
    /// block it opens is skipped as well.
    pub fn end_block(&mut self) {
        debug_assert!(!self.blocks.is_empty(), "end_block called without an open block");
        let Some(outer_depth) = self.blocks.len().checked_sub(1) else {
            error!("end_block called without an open block");
            return;
        };

        while self.blocks.len() > outer_depth {
            let token = self.get_token();
            if token.is_eof() {
                self.close_block();
            } else if token.is_preserved() {
                self.consume_token();
            } else {
                self.start_block();
            }
        }
    }

    /// Pop the innermost block. The parser must be at its (masked) end.
    fn close_block(&mut self) {
        let Some(block) = self.blocks.pop() else {
            return;
        };
        debug!(depth = self.blocks.len(), end = %block.end, "block closed");

        if self.token.is_eof() {
            self.emit(
                block.start,
                &CssError::syntax_warning("Unterminated block at end of document"),
            );
        } else if self.token.is(block.inherited_end) {
            debug_assert_eq!(block.end, TokenTag::Semicolon);
            let location = self.location;
            self.emit(location, &CssError::syntax_warning("Expected ';' at end of block"));
        } else if self.token.is_preserved() {
            self.token.clear();
        } else {
            // The alternative opener: its block is skipped in the same walk.
            self.start_block();
        }
    }

    /// Skip one component: a single token, or a whole block with its
    /// contents.
    pub fn skip(&mut self) {
        if self.get_token().is_preserved() {
            self.consume_token();
        } else {
            self.start_block();
            self.end_block();
        }
    }

    /// Skip components until one of tag `tag`, or the end of the innermost
    /// open block.
    pub fn skip_until(&mut self, tag: TokenTag) {
        self.skip_until_any(TokenSet::single(tag));
    }

    /// Skip components until one whose tag is in `set`, or the end of the
    /// innermost open block.
    pub fn skip_until_any(&mut self, set: TokenSet) {
        loop {
            let token = self.get_token();
            if token.is_eof() || set.matches(token) {
                return;
            }
            self.skip();
        }
    }
}
