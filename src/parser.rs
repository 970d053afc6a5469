//! Document driver: block loop, paragraph fallback, inline pass.
//!
//! One rule runs at a time to completion; nothing here suspends or
//! shares state across parses. Per line the driver tries the block
//! rules in priority order and falls back to the paragraph rule, which
//! accumulates lines until a blank line or until some block rule
//! matches in silent-probe mode. Paragraph text then runs the inline
//! pass: inline rules are tried at each character position and
//! unmatched text becomes literal `Text` tokens.

use crate::line::LineTable;
use crate::rules::{BlockRule, BlockState, InlineRule, InlineState, RuleSet};
use crate::token::{Token, TokenKind, TokenStream};

/// Parse a document into a token stream using the given rules.
pub fn parse(input: &str, rules: &RuleSet<'_>) -> TokenStream {
    let lines = LineTable::build(input);
    let mut state = BlockState::new(input, &lines);
    let end = lines.len();

    while state.line() < end {
        let line = state.line();
        if lines.is_blank(line) {
            state.set_line(line + 1);
            continue;
        }

        let mut matched = false;
        for rule in rules.block_rules() {
            if rule.scan(&mut state, line, end, false) {
                matched = true;
                break;
            }
        }
        if matched {
            debug_assert!(state.line() > line, "matched block rule must advance");
            continue;
        }

        paragraph(&mut state, rules, end);
    }

    state.into_tokens()
}

/// Fallback paragraph rule: accumulate lines, then run the inline pass.
fn paragraph(state: &mut BlockState<'_>, rules: &RuleSet<'_>, end: usize) {
    let start = state.line();
    let mut content = String::new();
    content.push_str(state.lines.content(state.input, start).trim_end());

    let mut next = start + 1;
    while next < end {
        if state.lines.is_blank(next) {
            break;
        }
        // A block rule matching here interrupts the paragraph.
        let mut interrupted = false;
        for rule in rules.block_rules() {
            if rule.scan(state, next, end, true) {
                interrupted = true;
                break;
            }
        }
        if interrupted {
            break;
        }
        content.push('\n');
        content.push_str(state.lines.content(state.input, next).trim_end());
        next += 1;
    }

    state.push(Token::new(TokenKind::ParagraphStart, ""));
    inline_pass(&content, rules, state);
    state.push(Token::new(TokenKind::ParagraphEnd, ""));
    state.set_line(next);
}

/// Run the inline rules over one paragraph's joined text.
fn inline_pass(src: &str, rules: &RuleSet<'_>, state: &mut BlockState<'_>) {
    let mut inline = InlineState::new(src, state.tokens_mut());
    while !inline.is_eof() {
        let mut matched = false;
        for rule in rules.inline_rules() {
            if rule.scan(&mut inline, false) {
                matched = true;
                break;
            }
        }
        if !matched {
            inline.bump();
        }
    }
    inline.finish();
}

/// Generic fenced code block rule (``` or ~~~).
///
/// Registered after the math block rule so fence-like math openers are
/// recognized as math first.
pub struct CodeFence;

impl CodeFence {
    fn open(text: &str) -> Option<(u8, usize, &str)> {
        let bytes = text.as_bytes();
        let fence_char = match bytes.first() {
            Some(b'`') | Some(b'~') => bytes[0],
            _ => return None,
        };
        let fence_len = bytes.iter().take_while(|&&b| b == fence_char).count();
        if fence_len < 3 {
            return None;
        }
        let info = text[fence_len..].trim();
        // Backtick info strings must not contain backticks.
        if fence_char == b'`' && info.contains('`') {
            return None;
        }
        Some((fence_char, fence_len, info))
    }

    fn closes(text: &str, fence_char: u8, fence_len: usize) -> bool {
        let bytes = text.as_bytes();
        let run = bytes.iter().take_while(|&&b| b == fence_char).count();
        run >= fence_len && text[run..].trim().is_empty()
    }
}

impl BlockRule for CodeFence {
    fn name(&self) -> &'static str {
        "fence"
    }

    fn scan(
        &self,
        state: &mut BlockState<'_>,
        start_line: usize,
        end_line: usize,
        silent: bool,
    ) -> bool {
        let text = state.lines.content(state.input, start_line);
        let Some((fence_char, fence_len, info)) = Self::open(text) else {
            return false;
        };
        if silent {
            return true;
        }

        let mut content = String::new();
        let mut line = start_line + 1;
        let mut last = start_line;
        while line < end_line {
            let inner = state.lines.content(state.input, line);
            if Self::closes(inner, fence_char, fence_len) {
                last = line;
                line += 1;
                break;
            }
            // Preserve interior indentation.
            content.push_str(state.lines.full(state.input, line));
            content.push('\n');
            last = line;
            line += 1;
        }

        let mut token = Token::spanning(TokenKind::CodeBlock, content, start_line, last);
        if !info.is_empty() {
            token.meta = Some(info.to_owned());
        }
        state.push(token);
        state.set_line(line);
        true
    }
}
