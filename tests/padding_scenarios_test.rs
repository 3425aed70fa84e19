//! End-to-end padding lint scenarios against the public API

use padcheck::validation::engine::{ALWAYS_MESSAGE, NEVER_MESSAGE};
use padcheck::{validate_document, Policy};

#[test]
fn unpadded_block_reports_both_edges() {
    // Brace line 1, statement line 2, closing brace line 3: a gap of
    // one line on each edge, where two are required
    let result = validate_document("{\n    foo();\n}", Policy::Always);

    assert_eq!(result.diagnostics.len(), 2);
    for d in &result.diagnostics {
        assert_eq!(d.message, ALWAYS_MESSAGE);
    }
    assert_eq!((result.diagnostics[0].line, result.diagnostics[0].col), (1, 0));
    assert_eq!((result.diagnostics[1].line, result.diagnostics[1].col), (3, 0));
}

#[test]
fn padded_block_is_clean_under_always() {
    let result = validate_document("{\n\n    foo();\n\n}", Policy::Always);
    assert!(result.is_clean());
}

#[test]
fn padded_block_reports_both_edges_under_never() {
    let result = validate_document("{\n\n    foo();\n\n}", Policy::Never);

    assert_eq!(result.diagnostics.len(), 2);
    for d in &result.diagnostics {
        assert_eq!(d.message, NEVER_MESSAGE);
    }
}

#[test]
fn unpadded_block_is_clean_under_never() {
    let result = validate_document("{\n    foo();\n}", Policy::Never);
    assert!(result.is_clean());
}

#[test]
fn padded_switch_is_clean_under_always() {
    // The opening delimiter is the token before the first case, not a
    // literal brace position assumption
    let result = validate_document("switch (x) {\n\n    case 1: break;\n\n}", Policy::Always);
    assert!(result.is_clean());
}

#[test]
fn unpadded_switch_reports_both_edges() {
    let result = validate_document("switch (x) {\n    case 1: break;\n}", Policy::Always);

    assert_eq!(result.diagnostics.len(), 2);
    // Top edge located at the construct's own start
    assert_eq!((result.diagnostics[0].line, result.diagnostics[0].col), (1, 0));
    // Bottom edge located at the closing brace
    assert_eq!((result.diagnostics[1].line, result.diagnostics[1].col), (3, 0));
}

#[test]
fn comment_on_line_after_brace_counts_as_content() {
    // The comment starts on line 2, a different line than the brace, so
    // it is the first substantive token and sits only one line past the
    // brace: the top edge is still unpadded
    let result = validate_document("{\n    // comment\n    foo();\n}", Policy::Always);

    assert_eq!(result.diagnostics.len(), 2);
    assert_eq!(result.diagnostics[0].line, 1);
}

#[test]
fn comment_on_brace_line_is_transparent() {
    // A trailing comment on the brace's own line neither satisfies nor
    // violates padding; the blank line on line 2 does
    let result = validate_document("{ // header\n\n    foo();\n\n}", Policy::Always);
    assert!(result.is_clean());

    let result = validate_document("{ // header\n    foo();\n\n}", Policy::Always);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].line, 1);
}

#[test]
fn trailing_comment_before_closing_brace_is_transparent() {
    let result = validate_document("{\n\n    foo();\n\n    /* tail */ }", Policy::Always);
    assert!(result.is_clean());
}

#[test]
fn empty_bodies_never_report() {
    for policy in [Policy::Always, Policy::Never] {
        assert!(validate_document("{}", policy).is_clean());
        assert!(validate_document("{\n\n}", policy).is_clean());
        assert!(validate_document("switch (x) {}", policy).is_clean());
        assert!(validate_document("switch (x) {\n\n}", policy).is_clean());
    }
}

#[test]
fn many_blank_lines_still_count_as_padded() {
    let source = "{\n\n\n\n    foo();\n\n\n\n}";
    assert!(validate_document(source, Policy::Always).is_clean());
    assert_eq!(validate_document(source, Policy::Never).diagnostics.len(), 2);
}

#[test]
fn nested_blocks_are_each_analyzed() {
    let source = "{\n\n    if (x)\n    {\n    bar();\n    }\n\n}";
    let result = validate_document(source, Policy::Always);

    // Outer block padded, inner block unpadded on both edges
    assert_eq!(result.diagnostics.len(), 2);
    assert_eq!(result.diagnostics[0].line, 4);
    assert_eq!(result.diagnostics[1].line, 6);
}

#[test]
fn blocks_inside_case_bodies_are_analyzed() {
    let source = "switch (x) {\n\n    case 1: {\n    foo();\n    }\n\n}";
    let result = validate_document(source, Policy::Always);

    // The switch is padded; the block in the case body is not
    assert_eq!(result.diagnostics.len(), 2);
    assert_eq!(result.diagnostics[0].line, 3);
    assert_eq!(result.diagnostics[1].line, 5);
}

#[test]
fn analysis_is_deterministic() {
    let source = "{\n    foo();\n\n}";
    let first = validate_document(source, Policy::Always);
    let second = validate_document(source, Policy::Always);
    assert_eq!(first, second);
}

#[test]
fn message_polarity_matches_policy() {
    let unpadded = "{\n    foo();\n}";

    let always = validate_document(unpadded, Policy::Always);
    assert!(always.diagnostics.iter().all(|d| d.message == ALWAYS_MESSAGE));

    let never = validate_document(unpadded, Policy::Never);
    assert!(never.is_clean());
}
