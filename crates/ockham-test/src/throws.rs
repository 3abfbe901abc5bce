use std::any::type_name;
use std::error::Error as StdError;

use ockham_core::{codes, short_type_name, AssertionError, ErrorInfo, Raised};

use crate::policy::PatternPolicy;

/// Asserts that `action` raises a failure of exactly type `K`.
pub fn assert_throws<K, F>(action: F) -> Result<(), AssertionError>
where
    K: StdError + 'static,
    F: FnOnce() -> Result<(), Raised>,
{
    assert_throws_matching::<K, F>(None, action)
}

/// Asserts that `action` raises a failure of exactly type `K` whose message
/// matches `pattern`.
///
/// The pattern is an unanchored regular expression compiled with the default
/// [`PatternPolicy`]. `None` matches any message.
pub fn assert_throws_matching<K, F>(pattern: Option<&str>, action: F) -> Result<(), AssertionError>
where
    K: StdError + 'static,
    F: FnOnce() -> Result<(), Raised>,
{
    assert_throws_with::<K, F>(pattern, &PatternPolicy::default(), action)
}

/// Like [`assert_throws_matching`], compiling `pattern` under `policy`.
///
/// An invalid pattern is reported as a setup failure before `action` runs.
/// Every failure synthesized after the action ran chains the raised error as
/// its cause.
pub fn assert_throws_with<K, F>(
    pattern: Option<&str>,
    policy: &PatternPolicy,
    action: F,
) -> Result<(), AssertionError>
where
    K: StdError + 'static,
    F: FnOnce() -> Result<(), Raised>,
{
    let matcher = pattern.map(|p| policy.compile(p)).transpose()?;
    let expected_kind = short_type_name(type_name::<K>());

    let raised = match action() {
        Ok(()) => {
            tracing::debug!(code = codes::NOT_RAISED, expected_kind, "action returned Ok");
            return Err(AssertionError::failed(
                ErrorInfo::new(codes::NOT_RAISED, "action did not raise")
                    .with_context("expected_kind", expected_kind),
            ));
        }
        Err(raised) => raised,
    };

    if !raised.is::<K>() {
        let kind = raised.kind_name();
        tracing::debug!(code = codes::WRONG_KIND, kind, expected_kind, "unexpected kind raised");
        return Err(AssertionError::failed(
            ErrorInfo::new(
                codes::WRONG_KIND,
                format!("action raised a failure of type {kind}"),
            )
            .with_context("actual_kind", kind)
            .with_context("expected_kind", expected_kind),
        )
        .with_cause(raised.into_inner()));
    }

    let (Some(matcher), Some(pattern)) = (matcher, pattern) else {
        tracing::trace!(expected_kind, "expected kind raised");
        return Ok(());
    };

    let message = raised.message();
    if matcher.is_match(&message) {
        tracing::trace!(expected_kind, pattern, "expected kind raised with matching message");
        return Ok(());
    }
    tracing::debug!(code = codes::MESSAGE_MISMATCH, pattern, "message did not match");
    Err(AssertionError::failed(
        ErrorInfo::new(
            codes::MESSAGE_MISMATCH,
            format!("failure message '{message}' did not match expected pattern '{pattern}'"),
        )
        .with_context("message", &message)
        .with_context("pattern", pattern),
    )
    .with_cause(raised.into_inner()))
}
