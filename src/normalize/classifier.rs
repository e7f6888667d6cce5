//! Line classification inside a comment block.

use crate::normalize::{CommentBlock, MarkerConfig};

/// What a single comment line contributes to the canonical block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    /// Exactly the canonical border
    Border,
    /// Build directive such as `//= require x`
    Directive,
    /// Dashed line or malformed border, rendered as the fixed separator
    Separator,
    /// Empty comment line
    Blank,
    /// Text with the marker, padding and trailing markers stripped
    Content(String),
}

pub struct LineClassifier<'a> {
    config: &'a MarkerConfig,
    border: String,
}

impl<'a> LineClassifier<'a> {
    pub fn new(config: &'a MarkerConfig) -> Self {
        Self {
            config,
            border: config.border(),
        }
    }

    /// Classify one raw comment line (starting at its marker), in priority order.
    pub fn classify(&self, raw_text: &str) -> ClassifiedLine {
        if self.config.is_directive(raw_text) {
            return ClassifiedLine::Directive;
        }

        let raw = raw_text.trim_end();
        if raw == self.border {
            return ClassifiedLine::Border;
        }

        // Decoration is recognised before any repeated marker is stripped, so
        // markers made of `-` (`--`) cannot eat into a dashed line.
        let body = raw.strip_prefix(self.config.marker.as_str()).unwrap_or(raw).trim();
        if self.is_dashed(body) || self.is_border_shaped(raw) {
            return ClassifiedLine::Separator;
        }

        let text = self.content_text(raw);
        if self.is_dashed(text.trim_start()) {
            return ClassifiedLine::Separator;
        }

        if text.is_empty() {
            ClassifiedLine::Blank
        } else {
            ClassifiedLine::Content(text)
        }
    }

    /// Classify every line of a block, dropping what never reaches the body.
    ///
    /// Directives and borders are dropped, as are blank and separator lines
    /// seen before the first content line. A block with no content therefore
    /// yields nothing and gets the placeholder body.
    pub fn classify_block(&self, block: &CommentBlock) -> Vec<ClassifiedLine> {
        let mut lines = Vec::with_capacity(block.tokens().len());
        let mut seen_content = false;

        for token in block.tokens() {
            let line = self.classify(&token.raw_text);
            log::trace!("line {}: {:?}", token.line, line);

            match line {
                ClassifiedLine::Border | ClassifiedLine::Directive => {}
                ClassifiedLine::Blank | ClassifiedLine::Separator if !seen_content => {}
                ClassifiedLine::Content(_) => {
                    seen_content = true;
                    lines.push(line);
                }
                _ => lines.push(line),
            }
        }

        lines
    }

    /// Strip the marker, then repeated markers each followed by a space or
    /// the end of the line, so `//// x` and `// // x` both become `x` while
    /// `-- --verbose` keeps its flag. Trailing markers are dropped the same
    /// way when whitespace precedes them.
    fn content_text(&self, raw: &str) -> String {
        let marker = self.config.marker.as_str();
        let mut text = raw.strip_prefix(marker).unwrap_or(raw);

        loop {
            text = text.strip_prefix(' ').unwrap_or(text);
            match text.strip_prefix(marker) {
                Some(rest) if rest.is_empty() || rest.starts_with(' ') => text = rest,
                _ => break,
            }
        }

        loop {
            text = text.trim_end();
            match text.strip_suffix(marker) {
                Some(rest) if rest.is_empty() || rest.ends_with(char::is_whitespace) => text = rest,
                _ => break,
            }
        }

        text.to_string()
    }

    fn is_dashed(&self, text: &str) -> bool {
        text.len() >= self.config.separator_min_length.max(1) && text.chars().all(|c| c == '-')
    }

    /// Only marker characters, spaces and at least one `=`: a border drawn at
    /// the wrong width or duplicated with padding.
    fn is_border_shaped(&self, raw: &str) -> bool {
        raw.contains('=')
            && raw
                .chars()
                .all(|c| c == '=' || c == ' ' || self.config.marker.contains(c))
    }
}
