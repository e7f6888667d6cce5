//! Partitions comment tokens into maximal runs of line-contiguous standalone comments.

use crate::comments::CommentToken;
use crate::normalize::MarkerConfig;

/// Non-empty run of standalone comment tokens on consecutive lines
#[derive(Debug, Clone, PartialEq)]
pub struct CommentBlock<'a> {
    tokens: Vec<&'a CommentToken>,
}

impl<'a> CommentBlock<'a> {
    fn start(token: &'a CommentToken) -> Self {
        Self { tokens: vec![token] }
    }

    pub fn tokens(&self) -> &[&'a CommentToken] {
        &self.tokens
    }

    pub fn first(&self) -> &'a CommentToken {
        self.tokens[0]
    }

    pub fn last(&self) -> &'a CommentToken {
        self.tokens[self.tokens.len() - 1]
    }

    pub fn first_line(&self) -> usize {
        self.first().line
    }

    pub fn last_line(&self) -> usize {
        self.last().line
    }

    /// Indentation of the block, taken from its first line
    pub fn indent(&self) -> usize {
        self.first().indent
    }

    fn accepts(&self, token: &CommentToken) -> bool {
        token.line == self.last_line() + 1
    }
}

/// Whether a token may belong to a block at all.
///
/// Trailing comments, comments with another leader, ignored prefixes and
/// directives are boundaries: they close the open block and are never part
/// of one.
fn is_eligible(token: &CommentToken, config: &MarkerConfig) -> bool {
    token.standalone
        && config.owns(&token.raw_text)
        && !config.is_ignored(&token.raw_text)
        && !config.is_directive(&token.raw_text)
}

/// Group tokens (in source order) into blocks.
pub fn group_blocks<'a>(tokens: &'a [CommentToken], config: &MarkerConfig) -> Vec<CommentBlock<'a>> {
    let mut blocks = Vec::new();
    let mut current: Option<CommentBlock<'a>> = None;

    for token in tokens {
        if !is_eligible(token, config) {
            blocks.extend(current.take());
            continue;
        }

        match current.as_mut() {
            Some(block) if block.accepts(token) => block.tokens.push(token),
            _ => {
                blocks.extend(current.take());
                current = Some(CommentBlock::start(token));
            }
        }
    }

    blocks.extend(current);
    blocks
}
