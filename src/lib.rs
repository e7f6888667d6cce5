pub mod comments;
pub mod config;
pub mod exit_codes;
pub mod lint_context;
pub mod normalize;
pub mod output;
pub mod rule;
pub mod rule_config_serde;
pub mod rules;
pub mod utils;

pub use comments::{CommentExtractor, CommentStyle, CommentSyntax, CommentToken, LineScanner};
pub use lint_context::LintContext;
pub use normalize::{Edit, MarkerConfig, Rewrite, collect_edits, rewrite};
pub use rules::*;

use crate::rule::{LintResult, Rule};

/// Lint content against the given rules
///
/// Assumes `rules` is the final, configured and filtered set to run.
pub fn lint(content: &str, rules: &[Box<dyn Rule>], syntax: &CommentSyntax) -> LintResult {
    let ctx = LintContext::new(content, syntax.clone());
    let mut warnings = Vec::new();

    for rule in rules {
        if rule.should_skip(&ctx) {
            log::debug!("skipping rule {}", rule.name());
            continue;
        }

        match rule.check(&ctx) {
            Ok(rule_warnings) => warnings.extend(rule_warnings),
            Err(e) => {
                log::error!("Error checking rule {}: {}", rule.name(), e);
                return Err(e);
            }
        }
    }

    warnings.sort_by(|a, b| a.line.cmp(&b.line).then(a.column.cmp(&b.column)));
    Ok(warnings)
}

/// Apply every rule's whole-file fix in turn, returning the fixed content
pub fn fix(content: &str, rules: &[Box<dyn Rule>], syntax: &CommentSyntax) -> Result<String, rule::LintError> {
    let mut fixed = content.to_string();

    for rule in rules {
        let next = {
            let ctx = LintContext::new(&fixed, syntax.clone());
            if rule.should_skip(&ctx) {
                continue;
            }
            rule.fix(&ctx)?
        };
        if next != fixed {
            log::debug!("rule {} changed the content", rule.name());
        }
        fixed = next;
    }

    Ok(fixed)
}
