//!
//! Comment tokens and the extractors producing them.
//!
//! The normalization engine never parses source code. It consumes a flat,
//! ordered list of [`CommentToken`]s produced by a [`CommentExtractor`]; any
//! tokenizer honouring that contract (an AST walker, a regex scanner) can
//! drive it. [`LineScanner`] is the line-oriented extractor used by the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One comment as seen by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentToken {
    /// 1-based source line
    pub line: usize,
    /// Byte length of the line's leading whitespace for standalone comments,
    /// byte column of the comment for trailing ones
    pub indent: usize,
    /// Comment text starting at its leader, without the line terminator
    pub raw_text: String,
    /// The comment is the only thing on its line
    pub standalone: bool,
}

impl CommentToken {
    pub fn standalone(line: usize, indent: usize, raw_text: impl Into<String>) -> Self {
        Self {
            line,
            indent,
            raw_text: raw_text.into(),
            standalone: true,
        }
    }

    pub fn trailing(line: usize, column: usize, raw_text: impl Into<String>) -> Self {
        Self {
            line,
            indent: column,
            raw_text: raw_text.into(),
            standalone: false,
        }
    }
}

/// Source of comment tokens for a file, in source order.
pub trait CommentExtractor {
    fn extract(&self, content: &str) -> Vec<CommentToken>;
}

/// Comment conventions of a host language family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// `//` banners (JavaScript, TypeScript, Rust, ...)
    #[default]
    Slash,
    /// `##` banners (Ruby, shell, YAML, ...)
    Hash,
}

impl FromStr for CommentStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slash" | "//" => Ok(CommentStyle::Slash),
            "hash" | "##" => Ok(CommentStyle::Hash),
            _ => Err(format!("Unknown comment style: {s} (expected 'slash' or 'hash')")),
        }
    }
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentStyle::Slash => write!(f, "slash"),
            CommentStyle::Hash => write!(f, "hash"),
        }
    }
}

/// Lexical details the scanner needs to find comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    pub marker: String,
    pub ignore_prefixes: Vec<String>,
    pub block_comment: Option<(String, String)>,
    /// Characters opening a string literal
    pub quotes: Vec<char>,
    /// Quotes whose literals may span lines
    pub multiline_quotes: Vec<char>,
}

impl CommentSyntax {
    pub fn slash() -> Self {
        Self {
            marker: "//".to_string(),
            ignore_prefixes: vec!["///".to_string()],
            block_comment: Some(("/*".to_string(), "*/".to_string())),
            quotes: vec!['"', '\'', '`'],
            multiline_quotes: vec!['`'],
        }
    }

    pub fn hash() -> Self {
        Self {
            marker: "##".to_string(),
            ignore_prefixes: Vec::new(),
            block_comment: None,
            quotes: vec!['"', '\''],
            multiline_quotes: Vec::new(),
        }
    }

    pub fn for_style(style: CommentStyle) -> Self {
        match style {
            CommentStyle::Slash => Self::slash(),
            CommentStyle::Hash => Self::hash(),
        }
    }

    /// Replace the preset marker; ignored prefixes that no longer extend it are dropped
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        let marker = self.marker.clone();
        self.ignore_prefixes
            .retain(|prefix| prefix.len() > marker.len() && prefix.starts_with(marker.as_str()));
        self
    }
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self::slash()
    }
}

/// Line-oriented comment scanner.
///
/// Tracks string literals and block comments well enough to avoid picking up
/// markers inside them; it is not a full lexer.
#[derive(Debug, Clone)]
pub struct LineScanner {
    syntax: CommentSyntax,
}

#[derive(Debug, Default)]
struct ScanState {
    in_block_comment: bool,
    open_quote: Option<char>,
}

impl LineScanner {
    pub fn new(syntax: &CommentSyntax) -> Self {
        Self { syntax: syntax.clone() }
    }

    fn scan_line(&self, line_num: usize, line: &str, state: &mut ScanState) -> Option<CommentToken> {
        let marker = self.syntax.marker.as_str();
        let mut pos = 0;

        if state.in_block_comment {
            let (_, close) = self.syntax.block_comment.as_ref()?;
            let end = line.find(close.as_str())?;
            state.in_block_comment = false;
            pos = end + close.len();
        }

        let mut token = None;
        let mut chars = line[pos..].char_indices().map(|(i, c)| (i + pos, c)).peekable();
        while let Some((i, c)) = chars.next() {
            if let Some(quote) = state.open_quote {
                if c == '\\' {
                    chars.next();
                } else if c == quote {
                    state.open_quote = None;
                }
                continue;
            }

            let rest = &line[i..];
            if !marker.is_empty() && rest.starts_with(marker) {
                let indent = line.len() - line.trim_start().len();
                token = Some(if indent == i {
                    CommentToken::standalone(line_num, indent, rest)
                } else {
                    CommentToken::trailing(line_num, i, rest)
                });
                break;
            }

            if let Some((open, close)) = &self.syntax.block_comment
                && rest.starts_with(open.as_str())
            {
                let after = i + open.len();
                match line[after..].find(close.as_str()) {
                    Some(end) => {
                        let resume = after + end + close.len();
                        // Skip to the end of the inline block comment
                        while chars.next_if(|&(j, _)| j < resume).is_some() {}
                        continue;
                    }
                    None => {
                        state.in_block_comment = true;
                        break;
                    }
                }
            }

            if self.syntax.quotes.contains(&c) {
                state.open_quote = Some(c);
            }
        }

        if let Some(quote) = state.open_quote
            && !self.syntax.multiline_quotes.contains(&quote)
        {
            state.open_quote = None;
        }

        token
    }
}

impl CommentExtractor for LineScanner {
    fn extract(&self, content: &str) -> Vec<CommentToken> {
        let mut state = ScanState::default();
        content
            .lines()
            .enumerate()
            .filter_map(|(i, line)| self.scan_line(i + 1, line, &mut state))
            .collect()
    }
}
