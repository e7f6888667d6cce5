//! JSON output formatter

use crate::output::OutputFormatter;
use crate::rule::LintWarning;
use serde_json::{Value, json};

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

fn warning_to_json(warning: &LintWarning, file_path: &str) -> Value {
    json!({
        "file": file_path,
        "line": warning.line,
        "column": warning.column,
        "end_line": warning.end_line,
        "end_column": warning.end_column,
        "rule": warning.rule_name.unwrap_or("unknown"),
        "message": warning.message,
        "severity": warning.severity,
        "fixable": warning.fix.is_some(),
        "fix": warning.fix.as_ref().map(|f| {
            json!({
                "range": {
                    "start": f.range.start,
                    "end": f.range.end
                },
                "replacement": f.replacement
            })
        })
    })
}

impl OutputFormatter for JsonFormatter {
    fn format_warnings(&self, warnings: &[LintWarning], file_path: &str) -> String {
        let json_warnings: Vec<Value> = warnings.iter().map(|w| warning_to_json(w, file_path)).collect();
        serde_json::to_string_pretty(&json_warnings).unwrap_or_default()
    }
}
