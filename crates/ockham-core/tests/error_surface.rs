use std::error::Error;

use ockham_core::errors::{codes, AssertionError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("expected_len", 2)
        .with_context("actual_len", 3)
}

#[test]
fn failed_error_surface() {
    let err = AssertionError::failed(sample_info(codes::LENGTH_MISMATCH, "lengths differ"));
    assert_eq!(err.code(), codes::LENGTH_MISMATCH);
    assert!(!err.is_setup());
    assert_eq!(err.info().context["expected_len"], "2");
    assert!(err.source().is_none());
}

#[test]
fn setup_error_surface() {
    let err = AssertionError::setup(sample_info(codes::INVALID_PATTERN, "bad pattern"));
    assert!(err.is_setup());
    assert_eq!(err.code(), codes::INVALID_PATTERN);
}

#[test]
fn display_lists_context_and_hint() {
    let info = ErrorInfo::new(codes::NOT_RAISED, "action did not raise")
        .with_context("expected_kind", "RangeError")
        .with_hint("check the action returns Err");
    let rendered = AssertionError::failed(info).to_string();
    assert_eq!(
        rendered,
        "assertion failed: action did not raise (code: not-raised) | context: \
         [expected_kind=RangeError] | hint: check the action returns Err"
    );
}

#[test]
fn cause_is_exposed_as_source() {
    let parse_err = "x".parse::<u8>().unwrap_err();
    let err = AssertionError::failed(ErrorInfo::new(codes::WRONG_KIND, "wrong kind"))
        .with_cause(parse_err.clone());
    let source = err.source().expect("source");
    assert_eq!(source.to_string(), parse_err.to_string());
    assert!(source.downcast_ref::<std::num::ParseIntError>().is_some());
}

#[test]
fn info_serializes_with_stable_code() {
    let info = sample_info(codes::LENGTH_MISMATCH, "lengths differ");
    let value = serde_json::to_value(&info).unwrap();
    assert_eq!(value["code"], "length-mismatch");
    assert_eq!(value["context"]["actual_len"], "3");
    assert!(value.get("hint").is_none());
}
