//! Output formatter implementations

pub mod concise;
pub mod json;
pub mod text;

pub use concise::ConciseFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
