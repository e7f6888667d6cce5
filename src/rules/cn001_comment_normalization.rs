use crate::comments::CommentSyntax;
use crate::lint_context::LintContext;
use crate::normalize::{self, MarkerConfig};
use crate::rule::{Fix, LintError, LintResult, LintWarning, Rule, Severity};
use crate::rule_config_serde::{config_to_toml_section, load_rule_config};

mod cn001_config;
pub use cn001_config::CN001Config;

/// Rule CN001: Comment blocks should be normalized
///
/// Runs of consecutive standalone comments written with the configured marker
/// are wrapped in a fixed-width border, with separators, blank comment lines
/// and content re-rendered in one canonical form:
///
/// ```text
/// //============================================================//
/// // Section title
/// // ---------
/// // Details
/// //============================================================//
/// ```
///
/// `check` reports one warning per block whose canonical form differs from
/// the source, carrying the replacement as its fix. `fix` rewrites the whole
/// file. Both run the same normalization pipeline.
#[derive(Debug, Clone, Default)]
pub struct CN001CommentNormalization {
    config: CN001Config,
}

impl CN001CommentNormalization {
    pub fn new(border_inner_width: usize, separator_min_length: usize) -> Self {
        Self {
            config: CN001Config {
                border_inner_width,
                separator_min_length,
            },
        }
    }

    pub fn from_config_struct(config: CN001Config) -> Self {
        Self { config }
    }

    /// Marker configuration for the file's comment syntax
    pub fn marker_config(&self, syntax: &CommentSyntax) -> MarkerConfig {
        MarkerConfig::new(syntax.marker.as_str())
            .with_border_inner_width(self.config.border_inner_width)
            .with_separator_min_length(self.config.separator_min_length)
            .with_ignore_prefixes(syntax.ignore_prefixes.iter().cloned())
    }
}

impl Rule for CN001CommentNormalization {
    fn name(&self) -> &'static str {
        "CN001"
    }

    fn description(&self) -> &'static str {
        "Comment blocks should be normalized"
    }

    fn check(&self, ctx: &LintContext) -> LintResult {
        if self.should_skip(ctx) {
            return Ok(Vec::new());
        }

        let marker_config = self.marker_config(&ctx.syntax);
        let warnings = normalize::plan(ctx.content, &ctx.comments, &marker_config)
            .into_iter()
            .map(|rewrite| {
                let (end_line, end_column) = ctx.offset_to_line_col(rewrite.edit.end_offset);
                LintWarning {
                    rule_name: Some(self.name()),
                    severity: Severity::Warning,
                    message: format!(
                        "Comment block is not normalized (expected bordered block of {} lines)",
                        rewrite.canonical.lines.len()
                    ),
                    line: rewrite.block.first_line(),
                    column: rewrite.block.indent() + 1,
                    end_line,
                    end_column,
                    fix: Some(Fix::from(rewrite.edit)),
                }
            })
            .collect();

        Ok(warnings)
    }

    fn fix(&self, ctx: &LintContext) -> Result<String, LintError> {
        if self.should_skip(ctx) {
            return Ok(ctx.content.to_string());
        }

        let marker_config = self.marker_config(&ctx.syntax);
        Ok(normalize::rewrite(ctx.content, &ctx.comments, &marker_config).text)
    }

    fn should_skip(&self, ctx: &LintContext) -> bool {
        ctx.comments.is_empty() || ctx.syntax.marker.is_empty()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn default_config_section(&self) -> Option<(String, toml::Value)> {
        config_to_toml_section(&CN001Config::default())
    }

    fn from_config(config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        let rule_config = load_rule_config::<CN001Config>(config);
        Box::new(Self::from_config_struct(rule_config))
    }
}
