//!
//! Banner-comment normalization engine.
//!
//! Rewrites runs of consecutive standalone comment lines into a canonical
//! bordered block:
//!
//! ```text
//! //============================================================//
//! // Content
//! //============================================================//
//! ```
//!
//! The pipeline is strictly one-way: tokens are grouped into blocks
//! ([`grouper`]), each line of a block is classified ([`classifier`]), the
//! classified lines are rendered into a canonical block ([`builder`]) and the
//! canonical block is compared with the original text ([`diff`]).
//!
//! [`collect_edits`] and [`rewrite`] are two thin adapters over the same
//! [`plan`], so a lint rule reporting violations and a formatter rewriting
//! files can never disagree on what needs fixing.

pub mod builder;
pub mod classifier;
pub mod diff;
pub mod grouper;

use serde::{Deserialize, Serialize};

use crate::comments::CommentToken;
use crate::utils::range_utils::LineIndex;

pub use builder::CanonicalBlock;
pub use classifier::{ClassifiedLine, LineClassifier};
pub use diff::apply_edits;
pub use grouper::CommentBlock;

/// Default number of `=` characters inside a border line
pub const DEFAULT_BORDER_INNER_WIDTH: usize = 60;

/// Default minimum run of `-` characters recognised as a separator
pub const DEFAULT_SEPARATOR_MIN_LENGTH: usize = 5;

/// Marker style the engine normalizes against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MarkerConfig {
    /// Comment leader identifying lines owned by the engine (`//`, `##`)
    pub marker: String,
    /// Count of `=` characters between the two markers of a border
    pub border_inner_width: usize,
    /// Minimum run of `-` characters for a line to count as a separator
    pub separator_min_length: usize,
    /// Comments starting with one of these prefixes are left alone (`///`)
    pub ignore_prefixes: Vec<String>,
}

impl MarkerConfig {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            border_inner_width: DEFAULT_BORDER_INNER_WIDTH,
            separator_min_length: DEFAULT_SEPARATOR_MIN_LENGTH,
            ignore_prefixes: Vec::new(),
        }
    }

    pub fn with_border_inner_width(mut self, width: usize) -> Self {
        self.border_inner_width = width;
        self
    }

    pub fn with_separator_min_length(mut self, length: usize) -> Self {
        self.separator_min_length = length;
        self
    }

    pub fn with_ignore_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// `marker + "=" * width + marker`
    pub fn border(&self) -> String {
        format!("{0}{1}{0}", self.marker, "=".repeat(self.border_inner_width))
    }

    /// Fixed separator written in place of any dashed or malformed border line
    pub fn separator(&self) -> String {
        format!("{} ---------", self.marker)
    }

    /// Body used when a block has no content at all
    pub fn placeholder(&self) -> String {
        format!("{} ...", self.marker)
    }

    /// Build directives such as `//= require jquery` or `##=link app.js`.
    ///
    /// A directive is the marker, an `=`, optional whitespace and then an
    /// ASCII word character (`[A-Za-z0-9_]`). Borders (`//====`) never qualify
    /// because `=` is not a word character, and neither does `//= é`.
    pub fn is_directive(&self, raw_text: &str) -> bool {
        raw_text
            .strip_prefix(self.marker.as_str())
            .and_then(|rest| rest.strip_prefix('='))
            .and_then(|rest| rest.trim_start().chars().next())
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Whether the comment opts out through an ignored prefix (e.g. `/// <reference />`)
    pub fn is_ignored(&self, raw_text: &str) -> bool {
        self.ignore_prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && raw_text.starts_with(prefix.as_str()))
    }

    /// Whether the comment is written with this marker at all
    pub fn owns(&self, raw_text: &str) -> bool {
        !self.marker.is_empty() && raw_text.starts_with(self.marker.as_str())
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self::new("//").with_ignore_prefixes(["///"])
    }
}

/// Atomic replacement of `start_offset..end_offset` in the original buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edit {
    pub start_offset: usize,
    pub end_offset: usize,
    pub replacement: String,
}

/// Whole-file rewrite result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub changed: bool,
}

/// A block that differs from its canonical form, paired with the edit fixing it
#[derive(Debug, Clone)]
pub struct BlockRewrite<'a> {
    pub block: CommentBlock<'a>,
    pub canonical: CanonicalBlock,
    pub edit: Edit,
}

/// Run the shared pipeline and keep every block that needs rewriting.
///
/// Blocks come back in source order. The edits never overlap because blocks
/// never share a line.
pub fn plan<'a>(text: &str, tokens: &'a [CommentToken], config: &MarkerConfig) -> Vec<BlockRewrite<'a>> {
    if tokens.is_empty() || config.marker.is_empty() {
        return Vec::new();
    }

    let index = LineIndex::new(text);
    let classifier = LineClassifier::new(config);

    grouper::group_blocks(tokens, config)
        .into_iter()
        .filter_map(|block| {
            let lines = classifier.classify_block(&block);
            let canonical = builder::build(&lines, block.indent(), config);
            let edit = diff::diff_block(&index, &block, &canonical)?;
            log::debug!(
                "comment block at lines {}-{} rewritten to {} lines",
                block.first_line(),
                block.last_line(),
                canonical.lines.len()
            );
            Some(BlockRewrite { block, canonical, edit })
        })
        .collect()
}

/// Edit-list mode: the replacements a caller should apply through its own machinery
pub fn collect_edits(text: &str, tokens: &[CommentToken], config: &MarkerConfig) -> Vec<Edit> {
    plan(text, tokens, config).into_iter().map(|rewrite| rewrite.edit).collect()
}

/// Whole-file mode: apply every edit and report whether anything changed
pub fn rewrite(text: &str, tokens: &[CommentToken], config: &MarkerConfig) -> Rewrite {
    let edits = collect_edits(text, tokens, config);
    if edits.is_empty() {
        return Rewrite {
            text: text.to_string(),
            changed: false,
        };
    }

    Rewrite {
        text: apply_edits(text, &edits),
        changed: true,
    }
}
