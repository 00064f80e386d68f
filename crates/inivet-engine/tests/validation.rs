use inivet_engine::{Severity, parse_lines, parse_text};
use pretty_assertions::assert_eq;

#[test]
fn clean_input_builds_the_full_model() {
    let verdict = parse_text("[a]\nx=1\n; comment\n\ny=2\n");

    assert!(verdict.passed());
    assert_eq!(verdict.total_lines, 5);
    assert_eq!(verdict.error_count, 0);

    let a = verdict.model.section("a").unwrap();
    assert_eq!(a.get("x"), Some("1"));
    assert_eq!(a.get("y"), Some("2"));
    assert_eq!(a.len(), 2);
    assert_eq!(verdict.model.len(), 1);
}

#[test]
fn all_errors_are_reported_in_one_pass() {
    let verdict = parse_text("x=1\n[b\n");

    assert!(!verdict.passed());
    assert_eq!(verdict.error_count, 2);
    assert_eq!(verdict.total_lines, 2);

    let errors: Vec<_> = verdict
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .map(|d| (d.line, d.message.as_str()))
        .collect();
    assert_eq!(
        errors,
        vec![
            (1, "Key-value pair found outside of any section"),
            (2, "Section missing closing bracket ']'"),
        ]
    );

    // the stray pair must not appear anywhere in the model
    assert!(verdict.model.is_empty());
}

#[test]
fn total_lines_matches_lines_read() {
    let lines = ["", "; c", "[a]", "x=1", "", "garbage"];
    let verdict = parse_lines(lines);
    assert_eq!(verdict.total_lines, lines.len());
}

#[test]
fn blank_and_comment_lines_produce_no_diagnostics() {
    let verdict = parse_text("\n   \n; one\n# two\n\t\n");

    assert!(verdict.passed());
    assert_eq!(verdict.total_lines, 5);
    assert!(verdict.diagnostics.is_empty());
    assert!(verdict.model.is_empty());
}

#[test]
fn diagnostics_stay_in_line_order() {
    let verdict = parse_text("[a]\nbad line\nx=1\nx=2\n[]\n");

    let lines: Vec<_> = verdict.diagnostics.iter().map(|d| d.line).collect();
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
}

#[test]
fn mixed_input_reports_everything_and_keeps_partial_model() {
    let input = "\
; app config
[server]
port=8080
port=9090
[server]
host=localhost
=nope
stray
[client
timeout=30
";
    let verdict = parse_text(input);

    assert!(!verdict.passed());
    assert_eq!(verdict.total_lines, 10);
    assert_eq!(verdict.error_count, 3);

    let warnings: Vec<_> = verdict
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .map(|d| d.line)
        .collect();
    assert_eq!(warnings, vec![4, 5]);

    // partial model still inspectable: [client never opened, so timeout
    // lands in the still-current [server]
    let server = verdict.model.section("server").unwrap();
    assert_eq!(server.get("port"), Some("9090"));
    assert_eq!(server.get("host"), Some("localhost"));
    assert_eq!(server.get("timeout"), Some("30"));
    assert_eq!(verdict.model.len(), 1);
}
