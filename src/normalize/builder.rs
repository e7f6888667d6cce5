//! Renders classified lines into the canonical bordered block.

use crate::normalize::{ClassifiedLine, MarkerConfig};

/// Canonical rendering of one comment block.
///
/// `lines` always starts and ends with the border; `indent` is the column of
/// the block's first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalBlock {
    pub indent: usize,
    pub lines: Vec<String>,
}

impl CanonicalBlock {
    /// Replacement text for the block span.
    ///
    /// The span starts at the original comment column, so the first line
    /// carries no prefix; every following line gets `indent` spaces.
    pub fn render(&self) -> String {
        let prefix = " ".repeat(self.indent);
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
                out.push_str(&prefix);
            }
            out.push_str(line);
        }
        out
    }

    pub fn body(&self) -> &[String] {
        let end = self.lines.len().saturating_sub(1);
        self.lines.get(1..end).unwrap_or(&[])
    }
}

/// Build the canonical block for already classified lines.
pub fn build(lines: &[ClassifiedLine], indent: usize, config: &MarkerConfig) -> CanonicalBlock {
    let marker = config.marker.as_str();

    let mut body: Vec<String> = lines
        .iter()
        .filter_map(|line| match line {
            ClassifiedLine::Content(text) => Some(format!("{marker} {text}")),
            ClassifiedLine::Separator => Some(config.separator()),
            ClassifiedLine::Blank => Some(marker.to_string()),
            ClassifiedLine::Border | ClassifiedLine::Directive => None,
        })
        .collect();

    if body.is_empty() {
        body.push(config.placeholder());
    }

    let border = config.border();
    let mut canonical = Vec::with_capacity(body.len() + 2);
    canonical.push(border.clone());
    canonical.extend(body);
    canonical.push(border);

    CanonicalBlock {
        indent,
        lines: canonical,
    }
}
