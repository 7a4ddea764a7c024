//! Regex-constrained strings.

use regex::Regex;
use serde_json::Value;

use crate::result::{self, SanitizeResult};

use super::traits::Sanitizer;

/// Accepts strings matching a regular expression.
///
/// Non-strings fail with `"string"` first; strings that don't match fail
/// with the pattern expectation (by default `string matching '<pattern>'`).
///
/// # Example
///
/// ```rust
/// use sanitizers::{matching, Sanitizer};
/// use serde_json::json;
///
/// let digits = matching(r"^\d+$").unwrap();
///
/// assert!(digits.sanitize(&json!("12345"), "").is_success());
///
/// let errors = digits.sanitize(&json!("abc"), "code").into_result().unwrap_err();
/// assert_eq!(errors.first().expected, r"string matching '^\d+$'");
/// ```
#[derive(Debug, Clone)]
pub struct MatchingSanitizer {
    regex: Regex,
    expected: String,
}

impl MatchingSanitizer {
    /// Compiles `pattern`.
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self {
            regex,
            expected: format!("string matching '{}'", pattern),
        })
    }

    /// Overrides the expectation reported when the pattern doesn't match.
    pub fn expecting(mut self, expected: impl Into<String>) -> Self {
        self.expected = expected.into();
        self
    }

    /// Returns the source pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Sanitizer for MatchingSanitizer {
    type Output = String;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<String> {
        let s = match value.as_str() {
            Some(s) => s,
            None => return result::fail(path, "string"),
        };

        if self.regex.is_match(s) {
            result::ok(s.to_string())
        } else {
            result::fail(path, self.expected.as_str())
        }
    }
}
