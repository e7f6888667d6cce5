//! Output formatting module for cmtnorm
//!
//! This module provides the output formats for `cmtnorm check`.

use crate::rule::LintWarning;
use std::str::FromStr;

pub mod formatters;

pub use formatters::*;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a collection of warnings for output
    fn format_warnings(&self, warnings: &[LintWarning], file_path: &str) -> String;
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Default human-readable format with colors
    Text,
    /// Concise format: file:line:col: [RULE] message
    Concise,
    /// JSON array of warnings with their fixes
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "full" => Ok(OutputFormat::Text),
            "concise" => Ok(OutputFormat::Concise),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl OutputFormat {
    /// Create a formatter instance for this format
    ///
    /// `use_colors` only affects the text format.
    pub fn create_formatter(&self, use_colors: bool) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text if use_colors => Box::new(TextFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::without_colors()),
            OutputFormat::Concise => Box::new(ConciseFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}
