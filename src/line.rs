//! Line table for the document buffer.
//!
//! Built once per parse with a single memchr pass. Block rules address
//! lines by index and read `{start, content_start, end}` offsets;
//! `content_start` has the leading indentation already stripped so
//! scanners see line text the same way regardless of indent.

use memchr::memchr_iter;

use crate::Range;

/// Offsets for one physical line (newline excluded).
#[derive(Clone, Copy, Debug)]
pub struct Line {
    /// Byte offset of the first character of the line.
    pub start: u32,
    /// Byte offset past any leading spaces/tabs.
    pub content_start: u32,
    /// Byte offset one past the last character (before the newline).
    pub end: u32,
}

/// Index from line number to buffer offsets.
pub struct LineTable {
    lines: Vec<Line>,
}

impl LineTable {
    /// Build the table for a document.
    pub fn build(input: &str) -> Self {
        let bytes = input.as_bytes();
        let mut lines = Vec::with_capacity(bytes.len() / 32 + 1);
        let mut start = 0usize;

        let mut push_line = |start: usize, end: usize, lines: &mut Vec<Line>| {
            let mut content_start = start;
            while content_start < end
                && (bytes[content_start] == b' ' || bytes[content_start] == b'\t')
            {
                content_start += 1;
            }
            lines.push(Line {
                start: start as u32,
                content_start: content_start as u32,
                end: end as u32,
            });
        };

        for nl in memchr_iter(b'\n', bytes) {
            push_line(start, nl, &mut lines);
            start = nl + 1;
        }
        if start < bytes.len() {
            push_line(start, bytes.len(), &mut lines);
        }

        Self { lines }
    }

    /// Number of lines in the document.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line text from its content start (indentation stripped) to its end.
    #[inline]
    pub fn content<'a>(&self, input: &'a str, i: usize) -> &'a str {
        let line = &self.lines[i];
        &input[line.content_start as usize..line.end as usize]
    }

    /// Full line text including leading indentation.
    #[inline]
    pub fn full<'a>(&self, input: &'a str, i: usize) -> &'a str {
        let line = &self.lines[i];
        &input[line.start as usize..line.end as usize]
    }

    /// Range covering the line's content.
    #[inline]
    pub fn content_range(&self, i: usize) -> Range {
        let line = &self.lines[i];
        Range::new(line.content_start, line.end)
    }

    /// Check if a line holds only whitespace.
    #[inline]
    pub fn is_blank(&self, i: usize) -> bool {
        let line = &self.lines[i];
        line.content_start == line.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_basic() {
        let input = "one\ntwo\nthree";
        let table = LineTable::build(input);
        assert_eq!(table.len(), 3);
        assert_eq!(table.content(input, 0), "one");
        assert_eq!(table.content(input, 1), "two");
        assert_eq!(table.content(input, 2), "three");
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        let table = LineTable::build("a\n");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let table = LineTable::build("");
        assert!(table.is_empty());
    }

    #[test]
    fn test_indent_stripped_from_content() {
        let input = "  \tindented";
        let table = LineTable::build(input);
        assert_eq!(table.content(input, 0), "indented");
        assert_eq!(table.full(input, 0), "  \tindented");
    }

    #[test]
    fn test_blank_lines() {
        let input = "a\n\n   \nb";
        let table = LineTable::build(input);
        assert_eq!(table.len(), 4);
        assert!(!table.is_blank(0));
        assert!(table.is_blank(1));
        assert!(table.is_blank(2));
        assert!(!table.is_blank(3));
    }

    #[test]
    fn test_content_range() {
        let input = "  x";
        let table = LineTable::build(input);
        let range = table.content_range(0);
        assert_eq!(range.slice(input), "x");
    }
}
