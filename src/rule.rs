//!
//! This module defines the Rule trait and related types for implementing rules in cmtnorm.
//! A rule reports warnings carrying byte-range fixes (edit-list mode) and can
//! rewrite a whole file (whole-file mode).

use dyn_clone::DynClone;
use serde::Serialize;
use std::ops::Range;
use thiserror::Error;

use crate::lint_context::LintContext;
use crate::normalize::Edit;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Fix failed: {0}")]
    FixFailed(String),
}

pub type LintResult = Result<Vec<LintWarning>, LintError>;

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct LintWarning {
    pub message: String,
    pub line: usize,       // 1-indexed start line
    pub column: usize,     // 1-indexed start column
    pub end_line: usize,   // 1-indexed end line
    pub end_column: usize, // 1-indexed end column, exclusive
    pub severity: Severity,
    pub fix: Option<Fix>,
    pub rule_name: Option<&'static str>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Fix {
    pub range: Range<usize>,
    pub replacement: String,
}

impl From<Edit> for Fix {
    fn from(edit: Edit) -> Self {
        Self {
            range: edit.start_offset..edit.end_offset,
            replacement: edit.replacement,
        }
    }
}

impl From<Fix> for Edit {
    fn from(fix: Fix) -> Self {
        Self {
            start_offset: fix.range.start,
            end_offset: fix.range.end,
            replacement: fix.replacement,
        }
    }
}

/// Severity reported with each warning
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
}

pub trait Rule: DynClone + Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn check(&self, ctx: &LintContext) -> LintResult;
    fn fix(&self, ctx: &LintContext) -> Result<String, LintError>;

    /// Check if this rule should quickly skip processing based on content
    fn should_skip(&self, _ctx: &LintContext) -> bool {
        false
    }

    fn as_any(&self) -> &dyn std::any::Any;

    /// Returns the rule name and default config table if the rule has config.
    fn default_config_section(&self) -> Option<(String, toml::Value)> {
        None
    }

    /// Factory: create a rule from config (if present), or use defaults.
    fn from_config(config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized;
}

dyn_clone::clone_trait_object!(Rule);
