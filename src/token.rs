//! Token stream and renderer dispatch.
//!
//! The pipeline appends tokens in document order; rendering walks the
//! stream once and dispatches on the kind tag. Math tokens carry
//! pre-rendered markup and pass through unchanged, so the engine's
//! output is never re-parsed or re-escaped.

use rustc_hash::FxBuildHasher;
use std::collections::HashMap;

/// Kind tag for a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Literal text, escaped at render time.
    Text,
    /// Paragraph open.
    ParagraphStart,
    /// Paragraph close.
    ParagraphEnd,
    /// Display math span; content is pre-rendered markup.
    BlockMath,
    /// Inline math span; content is pre-rendered markup.
    InlineMarkup,
    /// Fenced code block; `meta` holds the info string, if any.
    CodeBlock,
}

/// One entry in the token stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Opaque payload: literal text, raw code, or rendered markup.
    pub content: String,
    /// Extra payload for kinds that need it (code fence info string).
    pub meta: Option<String>,
    /// Line range `[first, last]` for block-level tokens.
    pub lines: Option<(u32, u32)>,
}

impl Token {
    /// Create a token with no metadata.
    pub fn new(kind: TokenKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            meta: None,
            lines: None,
        }
    }

    /// Create a block-level token spanning `first..=last` lines.
    pub fn spanning(kind: TokenKind, content: impl Into<String>, first: usize, last: usize) -> Self {
        Self {
            kind,
            content: content.into(),
            meta: None,
            lines: Some((first as u32, last as u32)),
        }
    }
}

/// Append-only sequence of tokens.
#[derive(Debug, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the stream is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in document order.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate tokens in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

/// Render function for one token kind.
pub type RenderFn = fn(&Token, &mut String);

/// Dispatch table from token kind to render function.
///
/// Registration replaces any previous entry for the kind, so callers
/// can override the defaults (e.g. to emit MathML wrappers).
pub struct RendererTable {
    table: HashMap<TokenKind, RenderFn, FxBuildHasher>,
}

impl RendererTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            table: HashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Create a table with the default HTML renderers registered.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.register(TokenKind::Text, render_text);
        table.register(TokenKind::ParagraphStart, render_paragraph_start);
        table.register(TokenKind::ParagraphEnd, render_paragraph_end);
        table.register(TokenKind::BlockMath, render_block_math);
        table.register(TokenKind::InlineMarkup, render_passthrough);
        table.register(TokenKind::CodeBlock, render_code_block);
        table
    }

    /// Register (or replace) the renderer for a kind.
    pub fn register(&mut self, kind: TokenKind, f: RenderFn) {
        self.table.insert(kind, f);
    }

    /// Render a token stream to a string.
    pub fn render(&self, tokens: &TokenStream) -> String {
        let mut out = String::new();
        for token in tokens.iter() {
            match self.table.get(&token.kind) {
                Some(f) => f(token, &mut out),
                None => log::debug!("no renderer registered for {:?}", token.kind),
            }
        }
        out
    }
}

impl Default for RendererTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn render_text(token: &Token, out: &mut String) {
    out.push_str(&html_escape::encode_text(&token.content));
}

fn render_paragraph_start(_token: &Token, out: &mut String) {
    out.push_str("<p>");
}

fn render_paragraph_end(_token: &Token, out: &mut String) {
    out.push_str("</p>\n");
}

/// Identity pass-through for pre-rendered markup.
fn render_passthrough(token: &Token, out: &mut String) {
    out.push_str(&token.content);
}

fn render_block_math(token: &Token, out: &mut String) {
    out.push_str(&token.content);
    out.push('\n');
}

fn render_code_block(token: &Token, out: &mut String) {
    out.push_str("<pre><code");
    if let Some(info) = &token.meta {
        out.push_str(" class=\"language-");
        out.push_str(&html_escape::encode_double_quoted_attribute(info));
        out.push('"');
    }
    out.push('>');
    out.push_str(&html_escape::encode_text(&token.content));
    out.push_str("</code></pre>\n");
}
