//! Inline math span scanner.
//!
//! Tries the configured pairs in declaration order at a fixed cursor
//! position: the left marker must open exactly at the cursor and the
//! right marker must appear before the end of the current line. Fixed-
//! position pair iteration (rather than a global nearest-delimiter
//! search) keeps scanning O(line length × pair count) and makes
//! precedence deterministic when one left marker prefixes another.

use crate::config::MathConfig;
use crate::emit::Emitter;
use crate::rules::{InlineRule, InlineState};
use crate::token::TokenKind;

/// Inline rule recognizing math spans within a single line.
pub struct InlineMath<'p> {
    config: &'p MathConfig,
    emitter: Emitter<'p>,
}

impl<'p> InlineMath<'p> {
    /// Create the rule over a configuration and emitter.
    pub fn new(config: &'p MathConfig, emitter: Emitter<'p>) -> Self {
        Self { config, emitter }
    }
}

impl InlineRule for InlineMath<'_> {
    fn name(&self) -> &'static str {
        "math_inline"
    }

    fn scan(&self, state: &mut InlineState<'_>, silent: bool) -> bool {
        let rest = state.rest();

        for pair in self.config.pairs() {
            let Some(after_open) = rest.strip_prefix(pair.left.as_str()) else {
                continue;
            };

            // A pair that never closes on this line falls through to
            // the next pair at the same starting position.
            let Some(idx) = find_close(after_open, &pair.right) else {
                continue;
            };

            if silent {
                return true;
            }

            let consumed = pair.left.len() + idx + pair.right.len();
            match self.emitter.render(&after_open[..idx], pair.display) {
                Ok(markup) => {
                    log::trace!("inline math matched at offset {}", state.pos());
                    state.push(TokenKind::InlineMarkup, markup);
                }
                // Render fault: the delimiters stay consumed, but no
                // markup is emitted for the span.
                Err(_) => state.flush_pending(),
            }
            state.consume(consumed);
            return true;
        }

        false
    }
}

/// Find the right marker within the current line.
///
/// Walks byte by byte so every candidate position is checked; a match
/// of valid UTF-8 always lands on a character boundary. Stops at a
/// newline: inline spans never span lines.
fn find_close(text: &str, right: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let needle = right.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] == b'\n' {
            return None;
        }
        if bytes[pos..].starts_with(needle) {
            return Some(pos);
        }
        pos += 1;
    }
    None
}
