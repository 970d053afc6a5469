//! Rule traits, scan state, and the ordered rule set.
//!
//! Rules are strategies invoked by the driver in registration order;
//! the first rule that matches wins. Every rule supports a silent
//! probe: report whether a match exists without mutating any state.
//! The driver uses silent probes to decide when a line interrupts a
//! paragraph.

use crate::line::LineTable;
use crate::token::{Token, TokenKind, TokenStream};

/// A block-level rule, tried once per candidate line.
pub trait BlockRule {
    /// Stable name used for ordered registration.
    fn name(&self) -> &'static str;

    /// Try to match starting at `start_line`, scanning no further than
    /// `end_line` (exclusive).
    ///
    /// Mutates `state` (advances the current line, appends tokens) only
    /// when returning `true` with `silent` unset.
    fn scan(
        &self,
        state: &mut BlockState<'_>,
        start_line: usize,
        end_line: usize,
        silent: bool,
    ) -> bool;
}

/// An inline rule, tried at the current cursor position within one
/// paragraph's text. Never crosses a newline.
pub trait InlineRule {
    /// Stable name used for ordered registration.
    fn name(&self) -> &'static str;

    /// Try to match at the cursor. Mutates `state` (advances the
    /// cursor, appends tokens) only when returning `true` with `silent`
    /// unset.
    fn scan(&self, state: &mut InlineState<'_>, silent: bool) -> bool;
}

/// Mutable document state threaded through block rules.
pub struct BlockState<'d> {
    /// Raw document buffer.
    pub input: &'d str,
    /// Line offset table.
    pub lines: &'d LineTable,
    line: usize,
    tokens: TokenStream,
}

impl<'d> BlockState<'d> {
    /// Create state at line zero with an empty token stream.
    pub fn new(input: &'d str, lines: &'d LineTable) -> Self {
        Self {
            input,
            lines,
            line: 0,
            tokens: TokenStream::new(),
        }
    }

    /// Current block line.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Set the current block line.
    #[inline]
    pub fn set_line(&mut self, line: usize) {
        self.line = line;
    }

    /// Append a token to the stream.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Mutable access to the token stream (for the inline pass).
    #[inline]
    pub fn tokens_mut(&mut self) -> &mut TokenStream {
        &mut self.tokens
    }

    /// Consume the state, yielding the token stream.
    pub fn into_tokens(self) -> TokenStream {
        self.tokens
    }
}

/// Mutable cursor state threaded through inline rules.
///
/// Literal text between matches is held pending and flushed as a
/// `Text` token when a rule pushes a span or the pass finishes.
pub struct InlineState<'s> {
    /// The paragraph's joined text (lines separated by `\n`).
    pub src: &'s str,
    tokens: &'s mut TokenStream,
    pos: usize,
    pending_start: usize,
}

impl<'s> InlineState<'s> {
    /// Create state at the start of `src`.
    pub fn new(src: &'s str, tokens: &'s mut TokenStream) -> Self {
        Self {
            src,
            tokens,
            pos: 0,
            pending_start: 0,
        }
    }

    /// Current cursor offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Check if the cursor is at the end of the text.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Text from the cursor to the end.
    #[inline]
    pub fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    /// Advance the cursor by one character, keeping it pending as
    /// literal text.
    pub fn bump(&mut self) {
        if let Some(ch) = self.rest().chars().next() {
            self.pos += ch.len_utf8();
        }
    }

    /// Flush pending literal text up to the cursor as a `Text` token.
    pub fn flush_pending(&mut self) {
        if self.pending_start < self.pos {
            self.tokens.push(Token::new(
                TokenKind::Text,
                &self.src[self.pending_start..self.pos],
            ));
        }
        self.pending_start = self.pos;
    }

    /// Flush pending text, then append a span token at the cursor.
    pub fn push(&mut self, kind: TokenKind, content: impl Into<String>) {
        self.flush_pending();
        self.tokens.push(Token::new(kind, content));
    }

    /// Consume `n` bytes as part of a committed match; the consumed
    /// bytes never become literal text.
    pub fn consume(&mut self, n: usize) {
        debug_assert!(self.pending_start == self.pos);
        self.pos += n;
        self.pending_start = self.pos;
    }

    /// Finish the pass, flushing any trailing literal text.
    pub fn finish(&mut self) {
        self.flush_pending();
    }
}

/// Ordered block and inline rules.
pub struct RuleSet<'p> {
    block: Vec<Box<dyn BlockRule + 'p>>,
    inline: Vec<Box<dyn InlineRule + 'p>>,
}

impl<'p> RuleSet<'p> {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self {
            block: Vec::new(),
            inline: Vec::new(),
        }
    }

    /// Append a block rule after all existing block rules.
    pub fn push_block(&mut self, rule: Box<dyn BlockRule + 'p>) {
        self.block.push(rule);
    }

    /// Insert a block rule before the named rule, or append if the
    /// name is not registered.
    pub fn insert_block_before(&mut self, anchor: &str, rule: Box<dyn BlockRule + 'p>) {
        match self.block.iter().position(|r| r.name() == anchor) {
            Some(i) => self.block.insert(i, rule),
            None => self.block.push(rule),
        }
    }

    /// Append an inline rule after all existing inline rules.
    pub fn push_inline(&mut self, rule: Box<dyn InlineRule + 'p>) {
        self.inline.push(rule);
    }

    /// Insert an inline rule before the named rule, or append if the
    /// name is not registered.
    pub fn insert_inline_before(&mut self, anchor: &str, rule: Box<dyn InlineRule + 'p>) {
        match self.inline.iter().position(|r| r.name() == anchor) {
            Some(i) => self.inline.insert(i, rule),
            None => self.inline.push(rule),
        }
    }

    /// Block rules in priority order.
    pub fn block_rules(&self) -> impl Iterator<Item = &(dyn BlockRule + 'p)> {
        self.block.iter().map(|r| r.as_ref())
    }

    /// Inline rules in priority order.
    pub fn inline_rules(&self) -> impl Iterator<Item = &(dyn InlineRule + 'p)> {
        self.inline.iter().map(|r| r.as_ref())
    }
}

impl Default for RuleSet<'_> {
    fn default() -> Self {
        Self::new()
    }
}
