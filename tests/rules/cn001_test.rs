use cmtnorm_lib::comments::CommentSyntax;
use cmtnorm_lib::lint_context::LintContext;
use cmtnorm_lib::rule::Rule;
use cmtnorm_lib::rules::CN001CommentNormalization;
use cmtnorm_lib::utils::fix_utils::apply_warning_fixes;
use pretty_assertions::assert_eq;

fn border() -> String {
    format!("//{}//", "=".repeat(60))
}

fn fix_slash(content: &str) -> String {
    let rule = CN001CommentNormalization::default();
    let ctx = LintContext::new(content, CommentSyntax::slash());
    rule.fix(&ctx).unwrap()
}

fn check_slash(content: &str) -> Vec<cmtnorm_lib::rule::LintWarning> {
    let rule = CN001CommentNormalization::default();
    let ctx = LintContext::new(content, CommentSyntax::slash());
    rule.check(&ctx).unwrap()
}

#[test]
fn test_cn001_single_comment_gets_borders() {
    let content = "// My comment\nconst x = 1\n";
    let b = border();
    assert_eq!(fix_slash(content), format!("{b}\n// My comment\n{b}\nconst x = 1\n"));

    let warnings = check_slash(content);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].line, 1);
    assert_eq!(warnings[0].column, 1);
    assert_eq!(
        warnings[0].message,
        "Comment block is not normalized (expected bordered block of 3 lines)"
    );
}

#[test]
fn test_cn001_canonical_block_unchanged() {
    let b = border();
    let content = format!("{b}\n// Already formatted\n{b}\nconst x = 1\n");
    assert!(check_slash(&content).is_empty());
    assert_eq!(fix_slash(&content), content);
}

#[test]
fn test_cn001_duplicated_borders_collapse() {
    let b = border();
    let content = format!("{b}\n{b}\n// Title\n{b}\n{b}\nconst x = 1\n");
    assert_eq!(fix_slash(&content), format!("{b}\n// Title\n{b}\nconst x = 1\n"));
}

#[test]
fn test_cn001_empty_comment_gets_placeholder() {
    let b = border();
    assert_eq!(fix_slash("//\nconst x = 1\n"), format!("{b}\n// ...\n{b}\nconst x = 1\n"));
}

#[test]
fn test_cn001_indented_block_keeps_indentation() {
    let b = border();
    let content = "function f() {\n    // Step one\n    // --------\n    //Step two\n    return 1\n}\n";
    let expected = format!(
        "function f() {{\n    {b}\n    // Step one\n    // ---------\n    // Step two\n    {b}\n    return 1\n}}\n"
    );
    assert_eq!(fix_slash(content), expected);
}

#[test]
fn test_cn001_separator_replaced_with_fixed_token() {
    let b = border();
    let content = "// First part\n// -----------------------\n// Second part\n";
    assert_eq!(
        fix_slash(content),
        format!("{b}\n// First part\n// ---------\n// Second part\n{b}\n")
    );
}

#[test]
fn test_cn001_wrong_width_border_becomes_separator() {
    let b = border();
    let content = "//==========//\n// Title\n//==========//\n";
    assert_eq!(fix_slash(content), format!("{b}\n// Title\n// ---------\n{b}\n"));
}

#[test]
fn test_cn001_padded_dashes_become_separator() {
    let b = border();
    let content = "// a\n//    ----------\n// b\n";
    assert_eq!(fix_slash(content), format!("{b}\n// a\n// ---------\n// b\n{b}\n"));
}

#[test]
fn test_cn001_separator_only_block_gets_placeholder() {
    let b = border();
    assert_eq!(fix_slash("// ----------\nx\n"), format!("{b}\n// ...\n{b}\nx\n"));
    assert_eq!(fix_slash("//=====//\n//\n"), format!("{b}\n// ...\n{b}\n"));
}

#[test]
fn test_cn001_dash_marker_canonical_block_is_stable() {
    let rule = CN001CommentNormalization::default();
    let b = format!("--{}--", "=".repeat(60));
    let canonical = format!("{b}\n-- a\n-- ---------\n-- --verbose flag\n{b}\nSELECT 1;\n");
    let ctx = LintContext::new(&canonical, CommentSyntax::hash().with_marker("--"));
    assert!(rule.check(&ctx).unwrap().is_empty());
    assert_eq!(rule.fix(&ctx).unwrap(), canonical);

    let messy = "-- a\n--    -------\n-- --verbose flag --\nSELECT 1;\n";
    let ctx = LintContext::new(messy, CommentSyntax::hash().with_marker("--"));
    assert_eq!(rule.fix(&ctx).unwrap(), canonical);
}

#[test]
fn test_cn001_content_cleanup() {
    let b = border();
    let content = "//No space\n// Trailing marker //\n//// Doubled marker\n";
    assert_eq!(
        fix_slash(content),
        format!("{b}\n// No space\n// Trailing marker\n// Doubled marker\n{b}\n")
    );
}

#[test]
fn test_cn001_leading_blank_dropped_trailing_blank_kept() {
    let b = border();
    let content = "//\n// Title\n//\n";
    assert_eq!(fix_slash(content), format!("{b}\n// Title\n//\n{b}\n"));
}

#[test]
fn test_cn001_directives_untouched() {
    let content = "//= require jquery\n//= require_tree .\n\nconst x = 1\n";
    assert!(check_slash(content).is_empty());
    assert_eq!(fix_slash(content), content);
}

#[test]
fn test_cn001_directive_splits_blocks() {
    let b = border();
    let content = "// Intro\n//= require app\n// Outro\n";
    assert_eq!(
        fix_slash(content),
        format!("{b}\n// Intro\n{b}\n//= require app\n{b}\n// Outro\n{b}\n")
    );
    assert_eq!(check_slash(content).len(), 2);
}

#[test]
fn test_cn001_triple_slash_untouched() {
    let content = "/// <reference path=\"globals.d.ts\" />\nconst x = 1\n";
    assert!(check_slash(content).is_empty());
}

#[test]
fn test_cn001_trailing_comment_untouched() {
    let content = "const x = 1 // explained here\nconst y = 2\n";
    assert!(check_slash(content).is_empty());
}

#[test]
fn test_cn001_markers_in_strings_and_block_comments() {
    let content = "const url = \"// not a comment\"\n/*\n// inside a block comment\n*/\n/* // inline */\n";
    assert!(check_slash(content).is_empty());
    assert_eq!(fix_slash(content), content);
}

#[test]
fn test_cn001_blocks_separated_by_code() {
    let b = border();
    let content = "// one\nlet a = 1;\n// two\n";
    let warnings = check_slash(content);
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].line, 1);
    assert_eq!(warnings[1].line, 3);
    assert_eq!(fix_slash(content), format!("{b}\n// one\n{b}\nlet a = 1;\n{b}\n// two\n{b}\n"));
}

#[test]
fn test_cn001_warning_fixes_match_whole_file_fix() {
    let content = "// one\nlet a = 1;\n\n  // two\n  // -----\n  //three\nlet b = 2;\n// four\n";
    let warnings = check_slash(content);
    assert_eq!(warnings.len(), 3);
    assert_eq!(apply_warning_fixes(content, &warnings).unwrap(), fix_slash(content));
}

#[test]
fn test_cn001_no_trailing_newline() {
    let b = border();
    assert_eq!(fix_slash("x\n// last"), format!("x\n{b}\n// last\n{b}"));
}

#[test]
fn test_cn001_hash_style() {
    let rule = CN001CommentNormalization::default();
    let content = "## Section\nputs 1\n";
    let ctx = LintContext::new(content, CommentSyntax::hash());
    let b = format!("##{}##", "=".repeat(60));
    assert_eq!(rule.fix(&ctx).unwrap(), format!("{b}\n## Section\n{b}\nputs 1\n"));
}

#[test]
fn test_cn001_custom_marker() {
    let rule = CN001CommentNormalization::default();
    let content = ";; Lisp banner\n(defun x ())\n";
    let ctx = LintContext::new(content, CommentSyntax::slash().with_marker(";;"));
    let b = format!(";;{};;", "=".repeat(60));
    assert_eq!(rule.fix(&ctx).unwrap(), format!("{b}\n;; Lisp banner\n{b}\n(defun x ())\n"));
}

#[test]
fn test_cn001_fix_is_idempotent() {
    let content = "  //\n  // Title //\n  //----------\n  //body\n  //\nfn main() {}\n";
    let once = fix_slash(content);
    assert_eq!(fix_slash(&once), once);
    assert!(check_slash(&once).is_empty());
}
