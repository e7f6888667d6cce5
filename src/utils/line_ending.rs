//! Line ending handling at the I/O boundary.
//!
//! The engine works on LF text; callers normalize on the way in and restore
//! the original ending on the way out.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    Crlf,
    Mixed,
}

pub fn detect_line_ending_enum(content: &str) -> LineEnding {
    let has_crlf = content.contains("\r\n");
    // LF characters that are NOT part of CRLF
    let has_standalone_lf = content.replace("\r\n", "").contains('\n');

    match (has_crlf, has_standalone_lf) {
        (true, true) => LineEnding::Mixed,
        (true, false) => LineEnding::Crlf,
        (false, _) => LineEnding::Lf,
    }
}

pub fn normalize_line_ending(content: &str, target: LineEnding) -> String {
    match target {
        LineEnding::Lf => content.replace("\r\n", "\n"),
        LineEnding::Crlf => content.replace("\r\n", "\n").replace('\n', "\r\n"),
        LineEnding::Mixed => content.to_string(), // Don't change mixed endings
    }
}

/// Bring `modified` back to the ending style of `original`.
///
/// Mixed originals are resolved to whichever ending is more common.
pub fn restore_line_endings(original: &str, modified: &str) -> String {
    let target = match detect_line_ending_enum(original) {
        LineEnding::Mixed => {
            let crlf_count = original.matches("\r\n").count();
            let lf_count = original.matches('\n').count() - crlf_count;
            if crlf_count > lf_count { LineEnding::Crlf } else { LineEnding::Lf }
        }
        ending => ending,
    };
    normalize_line_ending(modified, target)
}
