//! Block math span scanner.
//!
//! Decides whether a line opens a display-mode span and, if so, where
//! the span closes and what raw content it captures. A span closes on
//! the first line whose text contains the right marker with nothing
//! but whitespace after it; trailing content rejects the whole match
//! so mixed lines stay available for other rules.

use memchr::memmem;

use crate::config::{DelimiterPair, MathConfig};
use crate::emit::Emitter;
use crate::rules::{BlockRule, BlockState};
use crate::token::{Token, TokenKind};

/// Block rule recognizing display-mode math spans.
pub struct BlockMath<'p> {
    config: &'p MathConfig,
    emitter: Emitter<'p>,
}

impl<'p> BlockMath<'p> {
    /// Create the rule over a configuration and emitter.
    pub fn new(config: &'p MathConfig, emitter: Emitter<'p>) -> Self {
        Self { config, emitter }
    }

    fn emit(
        &self,
        state: &mut BlockState<'_>,
        raw: &str,
        first_line: usize,
        close_line: usize,
    ) -> bool {
        match self.emitter.render(raw.trim(), true) {
            Ok(markup) => {
                log::trace!(
                    "block math matched on lines {first_line}..={close_line}"
                );
                state.push(Token::spanning(
                    TokenKind::BlockMath,
                    markup,
                    first_line,
                    close_line,
                ));
                state.set_line(close_line + 1);
                true
            }
            // Emission is the last step: nothing was mutated, so the
            // whole attempt simply fails.
            Err(_) => false,
        }
    }
}

impl BlockRule for BlockMath<'_> {
    fn name(&self) -> &'static str {
        "math_block"
    }

    fn scan(
        &self,
        state: &mut BlockState<'_>,
        start_line: usize,
        end_line: usize,
        silent: bool,
    ) -> bool {
        let text = state.lines.content(state.input, start_line);

        // First display pair whose left marker opens the line wins;
        // no retry with another pair once scanning commits.
        let Some(pair) = self
            .config
            .display_pairs()
            .find(|p| text.starts_with(p.left.as_str()))
        else {
            return false;
        };

        let after_open = &text[pair.left.len()..];

        if let Some(idx) = find_marker(after_open, pair) {
            // Closes on the opening line.
            if !closes_cleanly(after_open, idx, pair) {
                return false;
            }
            if silent {
                return true;
            }
            return self.emit(state, &after_open[..idx], start_line, start_line);
        }

        // Accumulate lines until some line carries the right marker.
        let mut content = String::with_capacity(after_open.len() + 64);
        content.push_str(after_open);
        content.push('\n');

        let mut line = start_line + 1;
        while line < end_line {
            let text = state.lines.content(state.input, line);
            if let Some(idx) = find_marker(text, pair) {
                if !closes_cleanly(text, idx, pair) {
                    return false;
                }
                if silent {
                    return true;
                }
                content.push_str(&text[..idx]);
                return self.emit(state, &content, start_line, line);
            }
            content.push_str(text);
            content.push('\n');
            line += 1;
        }

        // Opener never closed; the accumulated buffer is discarded.
        false
    }
}

/// Find the right marker of `pair` in `text`.
fn find_marker(text: &str, pair: &DelimiterPair) -> Option<usize> {
    memmem::find(text.as_bytes(), pair.right.as_bytes())
}

/// Check that only whitespace follows the right marker found at `idx`.
fn closes_cleanly(text: &str, idx: usize, pair: &DelimiterPair) -> bool {
    text[idx + pair.right.len()..].trim().is_empty()
}
