use super::*;
use pretty_assertions::assert_eq;
use vellum_diagnostic::{ErrorKind, Origin, Severity};

fn check(source: &str) -> CheckReport {
    check_source(source, DiagnosticConfig::unlimited())
}

/// `(byte offset, severity, message)` of every report.
fn reports(report: &CheckReport) -> Vec<(usize, Severity, &str)> {
    report
        .diagnostics
        .iter()
        .map(|d| (d.location.bytes, d.severity, d.message.as_str()))
        .collect()
}

// === Well-formed input ===

#[test]
fn counts_rules_at_rules_and_declarations() {
    let report = check(
        "a { color: red; }\n@import \"x.css\";\n@media screen { b { margin: 0; padding: 1px; } }",
    );
    assert_eq!(reports(&report), vec![]);
    assert_eq!(report.rules, 2);
    assert_eq!(report.at_rules, 2);
    assert_eq!(report.declarations, 3);
}

#[test]
fn keyframes_hold_rules() {
    let report = check("@keyframes spin { from { opacity: 0; } to { opacity: 1; } }");
    assert_eq!(reports(&report), vec![]);
    assert_eq!(report.rules, 2);
    assert_eq!(report.at_rules, 1);
    assert_eq!(report.declarations, 2);
}

#[test]
fn font_face_holds_declarations() {
    let report = check("@font-face { font-family: x; src: url(a.woff); }");
    assert_eq!(reports(&report), vec![]);
    assert_eq!(report.rules, 0);
    assert_eq!(report.at_rules, 1);
    assert_eq!(report.declarations, 2);
}

#[test]
fn markup_comment_tokens_between_rules() {
    let report = check("<!-- a { b: c; } -->");
    assert_eq!(reports(&report), vec![]);
    assert_eq!(report.rules, 1);
}

#[test]
fn empty_declarations_are_allowed() {
    let report = check("a { ;; b: c; }");
    assert_eq!(reports(&report), vec![]);
    assert_eq!(report.declarations, 1);
}

#[test]
fn empty_input() {
    assert_eq!(check(""), CheckReport::default());
    assert_eq!(check("  /* nothing */  "), CheckReport::default());
}

// === Warnings ===

#[test]
fn last_declaration_without_semicolon_warns() {
    let report = check("a { color: red }");
    assert_eq!(
        reports(&report),
        vec![(15, Severity::Warning, "Expected ';' at end of block")]
    );
    assert_eq!(report.declarations, 1);
    assert!(!report.has_errors());
}

#[test]
fn unterminated_rule_warns_at_its_block() {
    let report = check("a { b: c;");
    assert_eq!(
        reports(&report),
        vec![(2, Severity::Warning, "Unterminated block at end of document")]
    );
    assert_eq!(report.rules, 1);
}

// === Errors ===

#[test]
fn missing_colon() {
    let report = check("a { color red; }");
    assert_eq!(reports(&report), vec![(10, Severity::Error, "Expected ':'")]);
    assert_eq!(report.rules, 1);
    assert_eq!(report.declarations, 0);
}

#[test]
fn missing_value() {
    let report = check("a { color:; }");
    assert_eq!(reports(&report), vec![(10, Severity::Error, "Expected a value")]);
}

#[test]
fn declaration_must_start_with_a_name() {
    let report = check("a { : red; b: c; }");
    assert_eq!(
        reports(&report),
        vec![(4, Severity::Error, "Expected an identifier")]
    );
    assert_eq!(report.declarations, 1);
}

#[test]
fn selectors_without_a_block() {
    let report = check("a b");
    assert_eq!(
        reports(&report),
        vec![(3, Severity::Error, "Expected '{' after selectors")]
    );
    assert_eq!(report.rules, 0);
}

#[test]
fn block_without_selectors() {
    let report = check("{ a: b; }");
    assert_eq!(reports(&report), vec![(0, Severity::Error, "Expected a selector")]);
    assert_eq!(report.rules, 1);
    assert_eq!(report.declarations, 1);
}

#[test]
fn tokenizer_errors_are_included() {
    let report = check("a { content: \"abc\n}");
    assert!(report.has_errors());
    let first = &report.diagnostics[0];
    assert_eq!(first.origin, Origin::Tokenizer);
    assert_eq!(first.kind, ErrorKind::Syntax);
    assert_eq!(first.location.bytes, 17);
}

#[test]
fn error_limit_bounds_the_report() {
    let source = "a { b c; d e; }";
    assert_eq!(check(source).error_count(), 2);

    let limited = check_source(
        source,
        DiagnosticConfig {
            error_limit: 1,
            deduplicate: true,
        },
    );
    assert_eq!(reports(&limited), vec![(6, Severity::Error, "Expected ':'")]);
}

#[test]
fn recovery_continues_with_the_next_rule() {
    let report = check("a { color red; } b { margin: 0; }");
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.rules, 2);
    assert_eq!(report.declarations, 1);
}
