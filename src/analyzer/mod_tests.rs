use super::*;

fn analyze(source: &str) -> AnalysisResult {
    Analyzer::new().analyze_source(source)
}

#[test]
fn empty_input_yields_empty_result() {
    let result = analyze("");
    assert!(result.is_clean());
    for kind in ViolationKind::ALL {
        assert_eq!(result.count_of(kind), 0);
    }
}

#[test]
fn analysis_is_idempotent() {
    let source = "public class Sample {\n      int misplaced_total = 1;\n}\n";
    let first = analyze(source);
    let second = analyze(source);
    assert_eq!(first.violations(), second.violations());
}

#[test]
fn line_length_boundary() {
    let at_limit = "x".repeat(120);
    assert!(analyze(&at_limit).is_clean());

    let past_limit = "x".repeat(121);
    let result = analyze(&past_limit);
    assert_eq!(result.count_of(ViolationKind::LineTooLong), 1);
    assert_eq!(result.violations()[0].line_number(), 1);
}

#[test]
fn indentation_block_propagates() {
    // Indentation widths 0,0,6,6,6,0: the jump at index 2 flags the block.
    let source = "aaa\nbbb\n      ccc\n      ddd\n      eee\nfff";
    let result = analyze(source);

    let lines: Vec<usize> = result
        .of_kind(ViolationKind::ImproperIndentation)
        .map(Violation::line_number)
        .collect();
    assert_eq!(lines, vec![3, 4, 5]);
}

#[test]
fn outdent_is_never_flagged() {
    let source = "        deep\nshallow";
    assert_eq!(
        analyze(source).count_of(ViolationKind::ImproperIndentation),
        0
    );
}

#[test]
fn two_space_deepening_is_allowed() {
    let source = "void run() {\n  body();\n}";
    assert_eq!(
        analyze(source).count_of(ViolationKind::ImproperIndentation),
        0
    );
}

#[test]
fn propagated_lines_skip_other_checks() {
    // Both block lines carry snake_case assignments; neither is naming-flagged
    // because scanning resumes past the block.
    let source = "aaa\n      int bad_name = 1;\n      int other_name = 2;\nccc";
    let result = analyze(source);

    assert_eq!(result.count_of(ViolationKind::ImproperIndentation), 2);
    assert_eq!(result.count_of(ViolationKind::NamingConvention), 0);
}

#[test]
fn lines_inside_block_skip_length_check() {
    let source = format!("aaa\n      bbb\n      {}", "y".repeat(130));
    let result = analyze(&source);

    assert_eq!(result.count_of(ViolationKind::ImproperIndentation), 2);
    assert_eq!(result.count_of(ViolationKind::LineTooLong), 0);
}

#[test]
fn flagged_line_keeps_its_length_violation() {
    // The length check runs before the indentation check on the same line.
    let source = format!("aaa\n      {}", "y".repeat(130));
    let result = analyze(&source);

    assert_eq!(result.count_of(ViolationKind::LineTooLong), 1);
    assert_eq!(result.count_of(ViolationKind::ImproperIndentation), 1);
}

#[test]
fn blank_line_run_detected() {
    let source = "code\n\n\nmore";
    let result = analyze(source);

    assert_eq!(result.count_of(ViolationKind::BlankLineRun), 1);
    let violation = result
        .of_kind(ViolationKind::BlankLineRun)
        .next()
        .expect("blank run violation");
    assert_eq!(violation.line_number(), 3);
}

#[test]
fn repeated_literal_lines_match_spec_sample() {
    let source = [
        r#"a("Hello World");"#,
        "plain line",
        r#"b("Hello World");"#,
        r#"c("Different String");"#,
        r#"d("Hello World");"#,
    ]
    .join("\n");
    let result = analyze(&source);

    let lines: Vec<usize> = result
        .of_kind(ViolationKind::RepeatedLiteral)
        .map(Violation::line_number)
        .collect();
    assert_eq!(lines, vec![1, 3, 5]);
    assert!(
        result
            .of_kind(ViolationKind::RepeatedLiteral)
            .all(|violation| violation.line_text().contains("Hello World"))
    );
}

#[test]
fn short_repeated_literal_is_ignored() {
    let source = "a(\"ok\");\nb(\"ok\");";
    assert_eq!(analyze(source).count_of(ViolationKind::RepeatedLiteral), 0);
}

#[test]
fn naming_checks_on_assignments() {
    assert!(analyze("String camelCaseVariable = value;").is_clean());

    let result = analyze("String variable_with_underscores = value;");
    assert_eq!(result.count_of(ViolationKind::NamingConvention), 1);
}

#[test]
fn per_line_findings_precede_literal_findings() {
    let source = [
        r#"a("dup literal");"#,
        r#"b("dup literal");"#,
        &"x".repeat(121),
    ]
    .join("\n");
    let result = analyze(&source);

    let sequence: Vec<(ViolationKind, usize)> = result
        .violations()
        .iter()
        .map(|violation| (violation.kind(), violation.line_number()))
        .collect();
    assert_eq!(
        sequence,
        vec![
            (ViolationKind::LineTooLong, 3),
            (ViolationKind::RepeatedLiteral, 1),
            (ViolationKind::RepeatedLiteral, 2),
        ]
    );
}

#[test]
fn end_to_end_sample_counts() {
    let source = format!(
        "public class Sample {{\n  \
         private int count = 0;\n  \
         String first = \"Hello World\";\n  \
         String second = \"Hello World\";\n  \
         String other = \"Different One\";\n  \
         // {}\n  \
         void run() {{\n        \
         int misplaced_total = 9;\n        \
         int another_line = 10;\n  \
         }}\n  \
         int bad_name = 5;\n}}\n// end",
        "x".repeat(117)
    );
    assert_eq!(source.lines().count(), 13);

    let result = analyze(&source);
    assert_eq!(result.count_of(ViolationKind::LineTooLong), 1);
    assert_eq!(result.count_of(ViolationKind::ImproperIndentation), 2);
    assert_eq!(result.count_of(ViolationKind::RepeatedLiteral), 2);
    assert!(result.count_of(ViolationKind::NamingConvention) >= 1);
}

#[test]
fn settings_override_thresholds() {
    let settings = RuleSettings {
        max_line_length: 10,
        ..RuleSettings::default()
    };
    let analyzer = Analyzer::with_settings(settings);

    let result = analyzer.analyze_source("a line that is well past ten characters");
    assert_eq!(result.count_of(ViolationKind::LineTooLong), 1);
}

#[test]
fn analyze_path_rejects_wrong_extension() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").expect("write file");

    let err = Analyzer::new().analyze_path(&path).unwrap_err();
    assert!(matches!(
        err,
        crate::StyleGuardError::InvalidFileType { .. }
    ));
}

#[test]
fn analyze_path_accepts_extension_case_insensitively() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("Sample.JAVA");
    std::fs::write(&path, "String bad_name = 1;\n").expect("write file");

    let result = Analyzer::new().analyze_path(&path).expect("analysis");
    assert_eq!(result.count_of(ViolationKind::NamingConvention), 1);
}

#[test]
fn analyze_path_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("Missing.java");

    let err = Analyzer::new().analyze_path(&path).unwrap_err();
    assert!(matches!(err, crate::StyleGuardError::FileRead { .. }));
}

#[test]
fn string_mode_skips_extension_check() {
    // The in-memory entry point has no file-type notion at all; any text is
    // analyzed best-effort.
    let result = analyze("just words, no source structure");
    assert!(result.is_clean());
}
