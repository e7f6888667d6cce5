//! Compares canonical blocks with the original text and applies edits.

use crate::normalize::{CanonicalBlock, CommentBlock, Edit};
use crate::utils::range_utils::LineIndex;

/// Produce the edit for a block, or `None` when it is already canonical.
///
/// Lines are compared after trimming surrounding whitespace, so a block is
/// only rewritten when its content, separators or borders are wrong.
pub fn diff_block(index: &LineIndex, block: &CommentBlock, canonical: &CanonicalBlock) -> Option<Edit> {
    let first = block.first_line();
    let last = block.last_line();

    let original: Option<Vec<&str>> = (first..=last).map(|line| index.line_text(line).map(str::trim)).collect();
    let Some(original) = original else {
        log::warn!("comment block at lines {first}-{last} lies outside the text, skipping");
        return None;
    };

    let unchanged = original.len() == canonical.lines.len()
        && original
            .iter()
            .zip(&canonical.lines)
            .all(|(old, new)| *old == new.trim());
    if unchanged {
        return None;
    }

    let start_offset = index.line_start(first)? + block.first().indent;
    let end_offset = index.line_end(last)?;

    Some(Edit {
        start_offset,
        end_offset,
        replacement: canonical.render(),
    })
}

/// Apply non-overlapping edits, highest offset first, so earlier offsets stay valid.
pub fn apply_edits(text: &str, edits: &[Edit]) -> String {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.start_offset.cmp(&a.start_offset).then(b.end_offset.cmp(&a.end_offset)));

    let mut result = text.to_string();
    for edit in ordered {
        if edit.start_offset > edit.end_offset
            || edit.end_offset > result.len()
            || !result.is_char_boundary(edit.start_offset)
            || !result.is_char_boundary(edit.end_offset)
        {
            log::warn!(
                "skipping edit {}..{} outside a text of {} bytes",
                edit.start_offset,
                edit.end_offset,
                result.len()
            );
            continue;
        }
        result.replace_range(edit.start_offset..edit.end_offset, &edit.replacement);
    }
    result
}
