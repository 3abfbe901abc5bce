use ockham_test::{codes, compile_pattern, PatternPolicy};

#[test]
fn partial_document_takes_defaults() {
    let policy = PatternPolicy::from_json_str(r#"{"case_insensitive": true}"#).unwrap();
    assert!(policy.case_insensitive);
    assert!(!policy.multi_line);
    assert_eq!(policy.size_limit, PatternPolicy::default().size_limit);
}

#[test]
fn malformed_document_is_a_setup_failure() {
    let err = PatternPolicy::from_json_str(r#"{"size_limit": "big"}"#).unwrap_err();
    assert!(err.is_setup());
    assert_eq!(err.code(), codes::INVALID_POLICY);
}

#[test]
fn multi_line_and_dot_flags_apply() {
    let policy = PatternPolicy::from_json_str(
        r#"{"multi_line": true, "dot_matches_new_line": true}"#,
    )
    .unwrap();
    let line_start = compile_pattern("^second", &policy).unwrap();
    assert!(line_start.is_match("first\nsecond"));
    let spanning = compile_pattern("first.second", &policy).unwrap();
    assert!(spanning.is_match("first\nsecond"));

    let strict = compile_pattern("^second", &PatternPolicy::default()).unwrap();
    assert!(!strict.is_match("first\nsecond"));
}

#[test]
fn tiny_size_limit_rejects_large_patterns() {
    let policy = PatternPolicy {
        size_limit: 16,
        ..PatternPolicy::default()
    };
    let err = compile_pattern(r"\w{50}", &policy).unwrap_err();
    assert_eq!(err.code(), codes::INVALID_PATTERN);
    assert_eq!(err.info().context["pattern"], r"\w{50}");
}
