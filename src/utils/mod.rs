pub mod fix_utils;
pub mod line_ending;
pub mod range_utils;

pub use line_ending::{LineEnding, detect_line_ending_enum, normalize_line_ending, restore_line_endings};
pub use range_utils::LineIndex;
