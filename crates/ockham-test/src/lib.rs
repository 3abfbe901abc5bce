#![deny(missing_docs)]
#![doc = "Assertion helpers for unit tests: ordered sequences, raised failures and exact-type equality."]

//! Every assertion returns `Result<(), AssertionError>`, so tests can use `?`
//! and keep the structured payload. Callback failures pass through untouched;
//! only failures synthesized here carry a chained cause.

/// Pattern compilation policy for message matching.
pub mod policy;
/// Sequence comparison helpers.
pub mod sequences;
/// Assertions over failures raised by an action.
pub mod throws;
/// Value and exact-type assertions.
pub mod values;

pub use ockham_core::{codes, AnyValue, AssertionError, BoxError, ErrorInfo, Raised};
pub use policy::{compile_pattern, PatternPolicy};
pub use sequences::{arrays_equal, assert_arrays_equal};
pub use throws::{assert_throws, assert_throws_matching, assert_throws_with};
pub use values::{assert_equal_same_type, strict_equal};
