mod cn001_comment_normalization;

pub use cn001_comment_normalization::{CN001CommentNormalization, CN001Config};

use crate::config::GlobalConfig;
use crate::rule::Rule;
use std::collections::HashSet;

/// Every available rule, configured from `config`
pub fn all_rules(config: &crate::config::Config) -> Vec<Box<dyn Rule>> {
    macro_rules! rule {
        ($ctor:ident) => {
            $ctor::from_config(config)
        };
    }
    vec![rule!(CN001CommentNormalization)]
}

/// Apply the `enable` / `disable` lists of the global config.
///
/// `disable = ["all"]` turns everything off unless `enable` names rules.
pub fn filter_rules(rules: &[Box<dyn Rule>], global_config: &GlobalConfig) -> Vec<Box<dyn Rule>> {
    let normalize = |names: &[String]| -> HashSet<String> { names.iter().map(|n| n.to_ascii_uppercase()).collect() };
    let disabled = normalize(&global_config.disable);
    let enabled = normalize(&global_config.enable);

    if disabled.contains("ALL") {
        return rules
            .iter()
            .filter(|rule| enabled.contains(rule.name()))
            .map(|rule| dyn_clone::clone_box(&**rule))
            .collect();
    }

    rules
        .iter()
        .filter(|rule| enabled.is_empty() || enabled.contains(rule.name()))
        .filter(|rule| !disabled.contains(rule.name()))
        .map(|rule| dyn_clone::clone_box(&**rule))
        .collect()
}
