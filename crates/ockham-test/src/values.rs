use std::fmt::Debug;

use ockham_core::{codes, AnyValue, AssertionError, ErrorInfo};

/// Element assertion based on `PartialEq`, rendering both sides with `Debug`
/// on mismatch.
pub fn strict_equal<T>(expected: &T, actual: &T) -> Result<(), AssertionError>
where
    T: PartialEq + Debug + ?Sized,
{
    if expected == actual {
        return Ok(());
    }
    tracing::debug!(code = codes::VALUE_MISMATCH, "values differ");
    Err(AssertionError::failed(
        ErrorInfo::new(
            codes::VALUE_MISMATCH,
            format!("expected {expected:?}, but actual was {actual:?}"),
        )
        .with_context("expected", format!("{expected:?}"))
        .with_context("actual", format!("{actual:?}")),
    ))
}

/// Asserts that `actual` is exactly of type `T` and equal to `expected`.
///
/// Equality is decided by `element_assert`, whose failure is returned
/// unchanged. The type check is an identity check on the concrete type.
pub fn assert_equal_same_type<T, F>(
    expected: Option<&T>,
    actual: Option<&dyn AnyValue>,
    element_assert: F,
) -> Result<(), AssertionError>
where
    T: 'static,
    F: FnOnce(&T, &T) -> Result<(), AssertionError>,
{
    let (expected, actual) = match (expected, actual) {
        (None, None) => return Ok(()),
        (Some(_), None) => {
            tracing::debug!(code = codes::ACTUAL_NULL, "actual value absent");
            return Err(AssertionError::failed(ErrorInfo::new(
                codes::ACTUAL_NULL,
                "actual value was null",
            )));
        }
        (None, Some(_)) => {
            tracing::debug!(code = codes::EXPECTED_NULL, "expected value absent");
            return Err(AssertionError::failed(ErrorInfo::new(
                codes::EXPECTED_NULL,
                "expected was null",
            )));
        }
        (Some(expected), Some(actual)) => (expected, actual),
    };

    let Some(typed) = actual.as_any().downcast_ref::<T>() else {
        let expected_type = std::any::type_name::<T>();
        let actual_type = actual.type_name();
        tracing::debug!(
            code = codes::TYPE_MISMATCH,
            expected_type,
            actual_type,
            "runtime type differs"
        );
        return Err(AssertionError::failed(
            ErrorInfo::new(
                codes::TYPE_MISMATCH,
                format!(
                    "provided value is of type {actual_type}, but expected value of type {expected_type}"
                ),
            )
            .with_context("expected_type", expected_type)
            .with_context("actual_type", actual_type),
        ));
    };
    element_assert(expected, typed)
}
