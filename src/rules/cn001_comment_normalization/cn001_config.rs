use crate::normalize::{DEFAULT_BORDER_INNER_WIDTH, DEFAULT_SEPARATOR_MIN_LENGTH};
use crate::rule_config_serde::RuleConfig;
use serde::{Deserialize, Serialize};

/// Configuration for CN001 (Comment normalization)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct CN001Config {
    /// Number of `=` characters between the two markers of a border (default: 60)
    #[serde(default = "default_border_inner_width")]
    pub border_inner_width: usize,

    /// Minimum run of `-` characters recognised as a separator (default: 5)
    #[serde(default = "default_separator_min_length")]
    pub separator_min_length: usize,
}

fn default_border_inner_width() -> usize {
    DEFAULT_BORDER_INNER_WIDTH
}

fn default_separator_min_length() -> usize {
    DEFAULT_SEPARATOR_MIN_LENGTH
}

impl Default for CN001Config {
    fn default() -> Self {
        Self {
            border_inner_width: default_border_inner_width(),
            separator_min_length: default_separator_min_length(),
        }
    }
}

impl RuleConfig for CN001Config {
    const RULE_NAME: &'static str = "CN001";
}
