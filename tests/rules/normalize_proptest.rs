use cmtnorm_lib::comments::CommentSyntax;
use cmtnorm_lib::config::Config;
use cmtnorm_lib::normalize::MarkerConfig;
use cmtnorm_lib::rule::Rule;
use cmtnorm_lib::rules::all_rules;
use cmtnorm_lib::utils::fix_utils::apply_warning_fixes;
use proptest::prelude::*;

const MARKERS: [&str; 4] = ["//", "##", ";;", "--"];

fn border(marker: &str) -> String {
    format!("{marker}{}{marker}", "=".repeat(60))
}

fn syntax_for(marker: &str) -> CommentSyntax {
    match marker {
        "//" => CommentSyntax::slash(),
        other => CommentSyntax::hash().with_marker(other),
    }
}

fn marker() -> impl Strategy<Value = &'static str> {
    prop::sample::select(MARKERS.to_vec())
}

/// Lines a normalized block reduces to separators, borders or nothing
fn decoration_line(marker: &'static str) -> impl Strategy<Value = String> {
    prop_oneof![
        (0usize..4, 5usize..20)
            .prop_map(move |(pad, dashes)| format!("{marker}{}{}", " ".repeat(pad), "-".repeat(dashes))),
        (1usize..70).prop_map(move |width| format!("{marker}{}{marker}", "=".repeat(width))),
        Just(border(marker)),
        Just(marker.to_string()),
    ]
}

fn comment_line(marker: &'static str) -> impl Strategy<Value = String> {
    let templates = prop::sample::select(vec![
        "{m} Title",
        "{m}Title without space",
        "{m} Title {m}",
        "{m}{m} doubled",
        "{m} {m} nested",
        "{m} path{m}to",
        "{m}   indented text",
        "{m} ...",
        "{m} ---",
        "{m}= require app",
        "{m}=link_tree ../images",
    ])
    .prop_map(move |template| template.replace("{m}", marker));

    prop_oneof![3 => templates, 1 => decoration_line(marker)]
}

fn code_line(marker: &'static str) -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "const x = 1".to_string(),
        "return value".to_string(),
        "}".to_string(),
        format!("let y = x {marker} trailing"),
        String::new(),
    ])
}

fn join_indented(lines: Vec<(usize, String)>) -> String {
    let mut text = lines
        .into_iter()
        .map(|(depth, line)| format!("{}{line}", "  ".repeat(depth)))
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    text
}

fn source(marker: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec((0usize..3, prop_oneof![comment_line(marker), code_line(marker)]), 0..30)
        .prop_map(join_indented)
}

/// A marker together with a source file written for it
fn marked_source() -> impl Strategy<Value = (&'static str, String)> {
    marker().prop_flat_map(|marker| source(marker).prop_map(move |text| (marker, text)))
}

fn rules() -> Vec<Box<dyn Rule>> {
    all_rules(&Config::default())
}

fn is_comment(marker: &str, line: &str) -> bool {
    line.trim_start().starts_with(marker)
}

/// Comment lines the engine never groups: directives and ignored prefixes
fn is_boundary(marker: &str, line: &str) -> bool {
    let trimmed = line.trim_start();
    let config = MarkerConfig::new(marker);
    config.is_directive(trimmed)
        || syntax_for(marker)
            .ignore_prefixes
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
}

fn in_block(marker: &str, line: &str) -> bool {
    is_comment(marker, line) && !is_boundary(marker, line)
}

fn directive_lines(marker: &str, text: &str) -> Vec<String> {
    let config = MarkerConfig::new(marker);
    text.lines()
        .filter(|line| config.is_directive(line.trim_start()))
        .map(str::to_string)
        .collect()
}

proptest! {
    #[test]
    fn fix_is_idempotent((marker, text) in marked_source()) {
        let syntax = syntax_for(marker);
        let once = cmtnorm_lib::fix(&text, &rules(), &syntax).unwrap();
        let twice = cmtnorm_lib::fix(&once, &rules(), &syntax).unwrap();
        prop_assert_eq!(&twice, &once);
        prop_assert!(cmtnorm_lib::lint(&once, &rules(), &syntax).unwrap().is_empty());
    }

    #[test]
    fn warning_fixes_agree_with_whole_file_fix((marker, text) in marked_source()) {
        let syntax = syntax_for(marker);
        let warnings = cmtnorm_lib::lint(&text, &rules(), &syntax).unwrap();
        let fixed = cmtnorm_lib::fix(&text, &rules(), &syntax).unwrap();
        prop_assert_eq!(apply_warning_fixes(&text, &warnings).unwrap(), fixed);
    }

    #[test]
    fn code_lines_are_untouched((marker, text) in marked_source()) {
        let fixed = cmtnorm_lib::fix(&text, &rules(), &syntax_for(marker)).unwrap();
        let code = |s: &str| {
            s.lines()
                .filter(|l| !is_comment(marker, l))
                .map(str::to_string)
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(code(&fixed), code(&text));
    }

    #[test]
    fn directives_survive_byte_for_byte((marker, text) in marked_source()) {
        let fixed = cmtnorm_lib::fix(&text, &rules(), &syntax_for(marker)).unwrap();
        prop_assert_eq!(directive_lines(marker, &fixed), directive_lines(marker, &text));
    }

    #[test]
    fn normalized_lines_have_canonical_shapes((marker, text) in marked_source()) {
        let fixed = cmtnorm_lib::fix(&text, &rules(), &syntax_for(marker)).unwrap();
        let border = border(marker);
        let padded = format!("{marker} ");
        for line in fixed.lines().filter(|l| in_block(marker, l)).map(str::trim) {
            prop_assert!(
                line == border || line == marker || line.starts_with(padded.as_str()),
                "unexpected comment line: {:?}",
                line
            );
        }
    }

    #[test]
    fn blocks_start_and_end_with_border((marker, text) in marked_source()) {
        let fixed = cmtnorm_lib::fix(&text, &rules(), &syntax_for(marker)).unwrap();
        let border = border(marker);
        let mut previous_is_block = false;
        let mut last_block_line = String::new();
        for line in fixed.lines() {
            let inside = in_block(marker, line);
            if inside && !previous_is_block {
                prop_assert_eq!(line.trim(), border.as_str());
            }
            if !inside && previous_is_block {
                prop_assert_eq!(last_block_line.as_str(), border.as_str());
            }
            previous_is_block = inside;
            last_block_line = line.trim().to_string();
        }
        if previous_is_block {
            prop_assert_eq!(last_block_line.as_str(), border.as_str());
        }
    }

    #[test]
    fn rewritten_lines_take_the_first_line_indent((marker, text) in marked_source()) {
        let warnings = cmtnorm_lib::lint(&text, &rules(), &syntax_for(marker)).unwrap();
        for warning in &warnings {
            let fix = warning.fix.as_ref().unwrap();
            let indent = " ".repeat(warning.column - 1);
            let border = border(marker);
            let mut lines = fix.replacement.split('\n');
            prop_assert_eq!(lines.next(), Some(border.as_str()));
            for line in lines {
                let rest = line.strip_prefix(indent.as_str());
                prop_assert!(
                    rest.is_some_and(|rest| rest.starts_with(marker)),
                    "line {:?} is not indented by {} spaces",
                    line,
                    indent.len()
                );
            }
        }
    }

    #[test]
    fn decoration_only_block_becomes_placeholder(
        (marker, depth, lines) in marker().prop_flat_map(|marker| {
            (Just(marker), 0usize..3, prop::collection::vec(decoration_line(marker), 1..6))
        })
    ) {
        let pad = "  ".repeat(depth);
        let text = join_indented(lines.into_iter().map(|line| (depth, line)).collect());
        let fixed = cmtnorm_lib::fix(&text, &rules(), &syntax_for(marker)).unwrap();
        let b = border(marker);
        prop_assert_eq!(fixed, format!("{pad}{b}\n{pad}{marker} ...\n{pad}{b}\n"));
    }
}
