use ockham_core::{codes, AssertionError, ErrorInfo};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Compilation options applied to message patterns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternPolicy {
    /// Match letters regardless of case.
    #[serde(default)]
    pub case_insensitive: bool,
    /// Let `^` and `$` match at line boundaries.
    #[serde(default)]
    pub multi_line: bool,
    /// Let `.` match `\n`.
    #[serde(default)]
    pub dot_matches_new_line: bool,
    /// Upper bound, in bytes, on the compiled program size.
    #[serde(default = "PatternPolicy::default_size_limit")]
    pub size_limit: usize,
}

impl PatternPolicy {
    const fn default_size_limit() -> usize {
        10 * (1 << 20)
    }

    /// Parses a policy from JSON; absent fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, AssertionError> {
        serde_json::from_str(json).map_err(|err| {
            AssertionError::setup(ErrorInfo::new(
                codes::INVALID_POLICY,
                format!("pattern policy is not valid: {err}"),
            ))
            .with_cause(err)
        })
    }

    /// Compiles `pattern` under this policy.
    ///
    /// A pattern that fails to compile is reported as a setup failure carrying
    /// the regex error as its cause.
    pub fn compile(&self, pattern: &str) -> Result<Regex, AssertionError> {
        RegexBuilder::new(pattern)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .size_limit(self.size_limit)
            .build()
            .map_err(|err| {
                tracing::debug!(code = codes::INVALID_PATTERN, pattern, "pattern rejected");
                AssertionError::setup(
                    ErrorInfo::new(
                        codes::INVALID_PATTERN,
                        format!("error pattern '{pattern}' is not a valid regular expression"),
                    )
                    .with_context("pattern", pattern),
                )
                .with_cause(err)
            })
    }
}

impl Default for PatternPolicy {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            size_limit: Self::default_size_limit(),
        }
    }
}

/// Compiles `pattern` under `policy`; see [`PatternPolicy::compile`].
pub fn compile_pattern(pattern: &str, policy: &PatternPolicy) -> Result<Regex, AssertionError> {
    policy.compile(pattern)
}
