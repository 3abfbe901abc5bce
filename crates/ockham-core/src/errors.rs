//! Structured error types shared across Ockham crates.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed error used to chain the underlying cause of an [`AssertionError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Stable codes carried by [`ErrorInfo::code`].
pub mod codes {
    /// The message pattern handed to a throws assertion failed to compile.
    pub const INVALID_PATTERN: &str = "invalid-pattern";
    /// A pattern policy document could not be parsed.
    pub const INVALID_POLICY: &str = "invalid-policy";
    /// The expected side was absent while the actual side was present.
    pub const EXPECTED_NULL: &str = "expected-null";
    /// The actual side was absent while the expected side was present.
    pub const ACTUAL_NULL: &str = "actual-null";
    /// Two sequences differ in length.
    pub const LENGTH_MISMATCH: &str = "length-mismatch";
    /// A raised failure had the right kind but its message did not match.
    pub const MESSAGE_MISMATCH: &str = "message-mismatch";
    /// The action raised a failure of an unexpected kind.
    pub const WRONG_KIND: &str = "wrong-kind";
    /// The action completed without raising.
    pub const NOT_RAISED: &str = "not-raised";
    /// The actual value's runtime type differs from the expected type.
    pub const TYPE_MISMATCH: &str = "type-mismatch";
    /// Two values compared unequal.
    pub const VALUE_MISMATCH: &str = "value-mismatch";
}

/// Structured payload attached to every [`AssertionError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (lengths, type names, patterns).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical failure type returned by every Ockham assertion.
///
/// `Setup` failures are raised before the code under test runs (a malformed
/// pattern, a malformed policy). `Failed` signals an unmet expectation. Both
/// may carry the failure that provoked them, reachable through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum AssertionError {
    /// The assertion could not be set up.
    #[error("assertion setup error: {info}")]
    Setup {
        /// Diagnostic payload.
        info: ErrorInfo,
        /// Underlying failure, if any.
        #[source]
        cause: Option<BoxError>,
    },
    /// The expectation was not met.
    #[error("assertion failed: {info}")]
    Failed {
        /// Diagnostic payload.
        info: ErrorInfo,
        /// Underlying failure, if any.
        #[source]
        cause: Option<BoxError>,
    },
}

impl AssertionError {
    /// Creates a setup failure without a cause.
    pub fn setup(info: ErrorInfo) -> Self {
        AssertionError::Setup { info, cause: None }
    }

    /// Creates an expectation failure without a cause.
    pub fn failed(info: ErrorInfo) -> Self {
        AssertionError::Failed { info, cause: None }
    }

    /// Attaches the failure that provoked this one.
    pub fn with_cause(self, cause: impl Into<BoxError>) -> Self {
        match self {
            AssertionError::Setup { info, .. } => AssertionError::Setup {
                info,
                cause: Some(cause.into()),
            },
            AssertionError::Failed { info, .. } => AssertionError::Failed {
                info,
                cause: Some(cause.into()),
            },
        }
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            AssertionError::Setup { info, .. } | AssertionError::Failed { info, .. } => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Returns `true` for failures detected before the code under test ran.
    pub fn is_setup(&self) -> bool {
        matches!(self, AssertionError::Setup { .. })
    }
}
