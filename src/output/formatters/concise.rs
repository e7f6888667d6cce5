//! Concise output formatter for easy parsing by editors

use crate::output::OutputFormatter;
use crate::rule::LintWarning;

/// Concise formatter: file:line:col: [RULE] message
#[derive(Default)]
pub struct ConciseFormatter;

impl ConciseFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for ConciseFormatter {
    fn format_warnings(&self, warnings: &[LintWarning], file_path: &str) -> String {
        warnings
            .iter()
            .map(|warning| {
                format!(
                    "{}:{}:{}: [{}] {}",
                    file_path,
                    warning.line,
                    warning.column,
                    warning.rule_name.unwrap_or("unknown"),
                    warning.message
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
