//! Utilities for applying fixes consistently between `check` and `fmt`
//!
//! Warnings carry their fixes as byte ranges (edit-list mode). Applying them
//! here goes through the engine's own edit applier, so the result is
//! identical to the whole-file rewrite a rule's `fix` produces.

use crate::normalize::{Edit, apply_edits};
use crate::rule::{Fix, LintError, LintWarning};

/// Apply every fix carried by `warnings` to `content`.
///
/// Identical fixes reported more than once are applied once; overlapping
/// fixes are rejected.
pub fn apply_warning_fixes(content: &str, warnings: &[LintWarning]) -> Result<String, LintError> {
    let mut fixes: Vec<&Fix> = warnings.iter().filter_map(|w| w.fix.as_ref()).collect();
    fixes.sort_by(|a, b| a.range.start.cmp(&b.range.start).then(a.range.end.cmp(&b.range.end)));
    fixes.dedup();

    for fix in &fixes {
        validate_fix_range(content, fix)?;
    }

    for pair in fixes.windows(2) {
        if pair[1].range.start < pair[0].range.end {
            return Err(LintError::FixFailed(format!(
                "overlapping fixes {:?} and {:?}",
                pair[0].range, pair[1].range
            )));
        }
    }

    let edits: Vec<Edit> = fixes.into_iter().map(|fix| Edit::from(fix.clone())).collect();
    Ok(apply_edits(content, &edits))
}

/// Check that a fix range lies within `content` on character boundaries
pub fn validate_fix_range(content: &str, fix: &Fix) -> Result<(), LintError> {
    if fix.range.start > fix.range.end {
        return Err(LintError::InvalidInput(format!(
            "Invalid fix range: start {} > end {}",
            fix.range.start, fix.range.end
        )));
    }

    if fix.range.end > content.len() {
        return Err(LintError::InvalidInput(format!(
            "Fix range end {} exceeds content length {}",
            fix.range.end,
            content.len()
        )));
    }

    if !content.is_char_boundary(fix.range.start) || !content.is_char_boundary(fix.range.end) {
        return Err(LintError::InvalidInput(format!(
            "Fix range {:?} splits a character",
            fix.range
        )));
    }

    Ok(())
}
