use crate::comments::{CommentExtractor, CommentSyntax, CommentToken, LineScanner};
use crate::utils::range_utils::LineIndex;

/// Per-file state shared by every rule: the content, its line index and the
/// comment tokens, extracted once.
pub struct LintContext<'a> {
    pub content: &'a str,
    pub line_index: LineIndex<'a>,
    pub syntax: CommentSyntax,
    pub comments: Vec<CommentToken>,
}

impl<'a> LintContext<'a> {
    /// Build a context, extracting comments with the [`LineScanner`]
    pub fn new(content: &'a str, syntax: CommentSyntax) -> Self {
        let comments = LineScanner::new(&syntax).extract(content);
        Self::with_comments(content, syntax, comments)
    }

    /// Build a context from comments supplied by another extractor
    pub fn with_comments(content: &'a str, syntax: CommentSyntax, comments: Vec<CommentToken>) -> Self {
        Self {
            content,
            line_index: LineIndex::new(content),
            syntax,
            comments,
        }
    }

    /// Map a byte offset to (line, column)
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        self.line_index.offset_to_line_col(offset)
    }
}
