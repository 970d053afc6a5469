//! texspan: line-oriented Markdown parsing with math-span recognition.
//!
//! A small rule-driven parsing pipeline whose focus is recognizing
//! embedded math notation bounded by configurable literal delimiter
//! pairs, at two granularities: display spans covering a run of lines
//! and inline spans inside a single line. Captured notation is handed
//! to a pluggable typesetting engine; the returned markup travels the
//! token stream opaquely.
//!
//! # Design Principles
//! - Literal-string delimiter matching only: no regex, no grammar
//! - Left-to-right rule priority; first match wins, no backtracking
//!   beyond pair iteration
//! - Silent probes let rules report feasibility without mutating state
//! - A failed span is never an error: the text falls through to
//!   ordinary paragraph handling
//!
//! # Example
//! ```
//! let html = texspan::to_html("The square \\(x^2\\) grows fast.");
//! assert!(html.contains("<code class=\"language-math math-inline\">x^2</code>"));
//! ```

pub mod block;
pub mod config;
pub mod emit;
pub mod engine;
pub mod inline;
pub mod line;
pub mod parser;
pub mod range;
pub mod rules;
pub mod token;

pub use block::BlockMath;
pub use config::{ConfigError, DelimiterPair, MathConfig};
pub use emit::Emitter;
pub use engine::{FencedMarkup, OutputFormat, RenderError, RenderOptions, Typesetter};
pub use inline::InlineMath;
pub use parser::CodeFence;
pub use range::Range;
pub use rules::{BlockRule, BlockState, InlineRule, InlineState, RuleSet};
pub use token::{RendererTable, Token, TokenKind, TokenStream};

/// Convert a document to HTML with the default configuration
/// (`\[ \]` display, `\( \)` inline) and the built-in engine.
pub fn to_html(input: &str) -> String {
    to_html_with(input, &MathConfig::default(), &FencedMarkup)
}

/// Convert a document to HTML with a custom configuration and engine.
///
/// Registers the math block rule before the generic fence rule and the
/// inline math rule ahead of the literal-text fallback, so math spans
/// are recognized before they could be mis-tokenized.
pub fn to_html_with(input: &str, config: &MathConfig, engine: &dyn Typesetter) -> String {
    let mut rules = RuleSet::new();
    rules.push_block(Box::new(CodeFence));
    rules.insert_block_before("fence", Box::new(BlockMath::new(config, Emitter::new(engine))));
    rules.push_inline(Box::new(InlineMath::new(config, Emitter::new(engine))));

    let tokens = parser::parse(input, &rules);
    RendererTable::with_defaults().render(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_document() {
        let html = to_html("Hello, world!");
        assert_eq!(html, "<p>Hello, world!</p>\n");
    }

    #[test]
    fn test_inline_math_in_paragraph() {
        let html = to_html(r"The square \(x^2\) grows fast.");
        assert_eq!(
            html,
            "<p>The square <code class=\"language-math math-inline\">x^2</code> grows fast.</p>\n"
        );
    }

    #[test]
    fn test_block_math_document() {
        let html = to_html("\\[\n x+y \n\\]");
        assert_eq!(html, "<code class=\"language-math math-display\">x+y</code>\n");
    }

    #[test]
    fn test_text_is_escaped_but_math_markup_is_not() {
        let html = to_html(r"a<b and \(x<y\)");
        assert!(html.contains("a&lt;b"), "Got: {html}");
        assert!(
            html.contains("<code class=\"language-math math-inline\">x&lt;y</code>"),
            "Got: {html}"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html(""), "");
    }

    #[test]
    fn test_only_whitespace() {
        assert_eq!(to_html("   \n\n   "), "");
    }

    #[test]
    fn test_dollar_config() {
        let html = to_html_with("$a$ and $$b$$", &MathConfig::dollars(), &FencedMarkup);
        assert!(html.contains("math-inline\">a</code>"), "Got: {html}");
        assert!(html.contains("math-display\">b</code>"), "Got: {html}");
    }
}
