//! Default text output formatter with colors

use crate::output::OutputFormatter;
use crate::rule::LintWarning;
use colored::*;

/// Default human-readable formatter with colors
pub struct TextFormatter {
    use_colors: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    fn paint(&self, text: String, style: fn(String) -> ColoredString) -> String {
        if self.use_colors { style(text).to_string() } else { text }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_warnings(&self, warnings: &[LintWarning], file_path: &str) -> String {
        warnings
            .iter()
            .map(|warning| {
                let rule_name = warning.rule_name.unwrap_or("unknown");
                // Fixable warnings are marked with [*]
                let fix_indicator = if warning.fix.is_some() { " [*]" } else { "" };

                format!(
                    "{}:{}:{}: {} {}{}",
                    self.paint(file_path.to_string(), |s| s.blue().underline()),
                    self.paint(warning.line.to_string(), |s| s.cyan()),
                    self.paint(warning.column.to_string(), |s| s.cyan()),
                    self.paint(format!("[{rule_name:5}]"), |s| s.yellow()),
                    warning.message,
                    self.paint(fix_indicator.to_string(), |s| s.green()),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
