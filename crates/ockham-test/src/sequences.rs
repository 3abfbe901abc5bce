use ockham_core::{codes, AssertionError, ErrorInfo};

/// Returns `true` when both sequences hold equal elements in the same order.
///
/// Two absent sequences are equal; an absent and a present one never are, even
/// when the present one is empty.
pub fn arrays_equal<T: PartialEq>(a: Option<&[T]>, b: Option<&[T]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y),
        _ => false,
    }
}

/// Asserts that `actual` matches `expected` element by element.
///
/// Lengths are checked first. `element_assert` then runs on each pair from
/// index 0 upward and its first failure is returned unchanged; later indices
/// are not visited.
pub fn assert_arrays_equal<T, F>(
    expected: Option<&[T]>,
    actual: Option<&[T]>,
    mut element_assert: F,
) -> Result<(), AssertionError>
where
    F: FnMut(&T, &T) -> Result<(), AssertionError>,
{
    let (expected, actual) = match (expected, actual) {
        (None, None) => return Ok(()),
        (None, Some(_)) => {
            return Err(null_side(codes::EXPECTED_NULL, "expected null reference"));
        }
        (Some(_), None) => {
            return Err(null_side(codes::ACTUAL_NULL, "actual is a null reference"));
        }
        (Some(expected), Some(actual)) => (expected, actual),
    };

    if expected.len() != actual.len() {
        tracing::debug!(
            code = codes::LENGTH_MISMATCH,
            expected_len = expected.len(),
            actual_len = actual.len(),
            "sequence lengths differ"
        );
        return Err(AssertionError::failed(
            ErrorInfo::new(
                codes::LENGTH_MISMATCH,
                format!(
                    "expected length {}, but actual length was {}",
                    expected.len(),
                    actual.len()
                ),
            )
            .with_context("expected_len", expected.len())
            .with_context("actual_len", actual.len()),
        ));
    }

    for (expected_elem, actual_elem) in expected.iter().zip(actual) {
        element_assert(expected_elem, actual_elem)?;
    }
    tracing::trace!(len = expected.len(), "sequences equal");
    Ok(())
}

fn null_side(code: &str, message: &str) -> AssertionError {
    tracing::debug!(code, "one side of the comparison is absent");
    AssertionError::failed(ErrorInfo::new(code, message))
}
