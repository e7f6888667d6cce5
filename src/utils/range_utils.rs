//! Utilities for position/range conversions

/// Byte offsets of every line start in a text, with 1-based line lookups.
#[derive(Debug)]
pub struct LineIndex<'a> {
    content: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(content: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in content.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }

        Self { content, line_starts }
    }

    /// Byte offset where the 1-based `line` starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        if line == 0 {
            return None; // Lines are 1-based
        }
        self.line_starts.get(line - 1).copied()
    }

    /// Byte offset where the content of `line` ends, before `\n` or `\r\n`.
    pub fn line_end(&self, line: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = match self.line_starts.get(line) {
            Some(&next) => next - 1,
            None => self.content.len(),
        };

        if end > start && self.content.as_bytes()[end - 1] == b'\r' {
            Some(end - 1)
        } else {
            Some(end)
        }
    }

    /// Text of `line` without its terminator.
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        let start = self.line_start(line)?;
        let end = self.line_end(line)?;
        self.content.get(start..end)
    }

    /// Map a byte offset to 1-based (line, column)
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line + 1, 1),
            Err(line) => {
                let line_start = self.line_starts.get(line.wrapping_sub(1)).copied().unwrap_or(0);
                (line, offset - line_start + 1)
            }
        }
    }
}
