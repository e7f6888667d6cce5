//!
//! This module defines configuration structures and loading logic for cmtnorm.
//! Configuration is read from an explicit TOML file; there is no discovery.

use crate::comments::{CommentStyle, CommentSyntax};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Keys accepted in the `[global]` section
const GLOBAL_KEYS: &[&str] = &["enable", "disable", "style", "marker", "output-format"];

/// Normalizes configuration keys (rule names, option names) to lowercase kebab-case.
pub fn normalize_key(key: &str) -> String {
    // If the key looks like a rule name (e.g., CN001), uppercase it
    if key.len() == 5
        && key.to_ascii_lowercase().starts_with("cn")
        && key[2..].chars().all(|c| c.is_ascii_digit())
    {
        key.to_ascii_uppercase()
    } else {
        key.replace('_', "-").to_ascii_lowercase()
    }
}

/// Represents a rule-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RuleConfig {
    /// Configuration values for the rule
    #[serde(flatten)]
    pub values: BTreeMap<String, toml::Value>,
}

/// Represents the complete configuration loaded from a cmtnorm TOML file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Global configuration options
    #[serde(default)]
    pub global: GlobalConfig,

    /// Rule-specific configurations
    #[serde(flatten)]
    pub rules: BTreeMap<String, RuleConfig>,
}

/// Global configuration options
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Enabled rules (empty means all)
    pub enable: Vec<String>,

    /// Disabled rules
    pub disable: Vec<String>,

    /// Comment style preset
    pub style: CommentStyle,

    /// Marker overriding the style preset (e.g. `;;`)
    pub marker: Option<String>,

    /// Output format for `check` (text, concise, json)
    pub output_format: Option<String>,
}

impl Config {
    /// Load configuration from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            log::debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        let config = Self::from_toml_str(&content, &path.display().to_string())?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse a TOML document; `display_path` is only used in messages
    pub fn from_toml_str(content: &str, display_path: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: display_path.to_string(),
            message: e.to_string(),
        })?;

        let mut config = Config::default();
        for (key, value) in table {
            if key == "global" {
                config.global = parse_global(value, display_path)?;
                continue;
            }

            match value {
                toml::Value::Table(values) => {
                    let values = values.into_iter().map(|(k, v)| (normalize_key(&k), v)).collect();
                    config.rules.insert(normalize_key(&key), RuleConfig { values });
                }
                _ => log::warn!("[WARN] Ignoring unknown top-level key in {display_path}: {key}"),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(marker) = &self.global.marker
            && !is_valid_marker(marker)
        {
            return Err(ConfigError::InvalidValue {
                key: "global.marker".to_string(),
                message: format!("'{marker}' must be non-empty punctuation without whitespace"),
            });
        }
        Ok(())
    }

    /// Comment syntax selected by `style`, with the marker override applied
    pub fn comment_syntax(&self) -> CommentSyntax {
        let syntax = CommentSyntax::for_style(self.global.style);
        match &self.global.marker {
            Some(marker) => syntax.with_marker(marker.as_str()),
            None => syntax,
        }
    }
}

fn parse_global(value: toml::Value, display_path: &str) -> Result<GlobalConfig, ConfigError> {
    let toml::Value::Table(table) = value else {
        return Err(ConfigError::ParseError {
            path: display_path.to_string(),
            message: "[global] must be a table".to_string(),
        });
    };

    let table: toml::Table = table
        .into_iter()
        .map(|(k, v)| (normalize_key(&k), v))
        .filter(|(k, _)| {
            let known = GLOBAL_KEYS.contains(&k.as_str());
            if !known {
                log::warn!("[WARN] Unknown key in [global] section of {display_path}: {k}");
            }
            known
        })
        .collect();

    GlobalConfig::deserialize(toml::Value::Table(table)).map_err(|e| ConfigError::ParseError {
        path: display_path.to_string(),
        message: e.to_string(),
    })
}

fn is_valid_marker(marker: &str) -> bool {
    !marker.is_empty() && marker.chars().all(|c| c.is_ascii_punctuation())
}

const DEFAULT_CONFIG_HEADER: &str = r#"# cmtnorm configuration file

[global]
# Comment style preset: "slash" (//) or "hash" (##)
style = "slash"

# Marker overriding the preset (uncomment to use)
# marker = ";;"

# List of rules to disable
# disable = ["CN001"]

# Output format for `cmtnorm check`: text, concise or json
# output-format = "text"
"#;

/// Create a default configuration file at the specified path.
///
/// Rule tables are rendered from each rule's default configuration.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::FileExists {
            path: path.display().to_string(),
        });
    }

    let mut content = DEFAULT_CONFIG_HEADER.to_string();
    for rule in crate::rules::all_rules(&Config::default()) {
        if let Some((name, value)) = rule.default_config_section() {
            content.push_str(&format!("\n# {}\n", rule.description()));
            content.push_str(&render_rule_section(&name, value)?);
        }
    }

    fs::write(path, content).map_err(|source| ConfigError::IoError {
        source,
        path: path.display().to_string(),
    })
}

fn render_rule_section(name: &str, value: toml::Value) -> Result<String, ConfigError> {
    let mut table = toml::Table::new();
    table.insert(name.to_string(), value);
    toml::to_string(&table).map_err(|e| ConfigError::InvalidValue {
        key: name.to_string(),
        message: e.to_string(),
    })
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config file at {path}: {message}")]
    ParseError { path: String, message: String },

    /// A value has the right type but is not acceptable
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    FileExists { path: String },
}
