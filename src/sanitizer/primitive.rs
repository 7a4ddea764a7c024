//! Primitive sanitizers.
//!
//! Each primitive does one runtime type check against the raw value. On a
//! match the value is returned unchanged (converted to its Rust type); on a
//! mismatch the result holds exactly one entry naming the expected type at
//! the caller's path.

use serde_json::Value;

use crate::result::{self, SanitizeResult};

use super::traits::Sanitizer;

/// Accepts JSON strings.
///
/// # Example
///
/// ```rust
/// use sanitizers::{string, ErrorEntry, Sanitizer};
/// use serde_json::json;
///
/// let result = string().sanitize(&json!("hello"), "");
/// assert_eq!(result.into_result(), Ok("hello".to_string()));
///
/// let errors = string().sanitize(&json!(42), "name").into_result().unwrap_err();
/// assert_eq!(errors.into_vec(), vec![ErrorEntry::new("name", "string")]);
/// ```
#[derive(Debug, Clone)]
pub struct StringSanitizer {
    expected: String,
}

impl StringSanitizer {
    /// Creates a string sanitizer reporting `"string"` on mismatch.
    pub fn new() -> Self {
        Self {
            expected: "string".to_string(),
        }
    }

    /// Overrides the expectation reported on mismatch.
    pub fn expecting(mut self, expected: impl Into<String>) -> Self {
        self.expected = expected.into();
        self
    }
}

impl Default for StringSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer for StringSanitizer {
    type Output = String;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<String> {
        match value {
            Value::String(s) => result::ok(s.clone()),
            _ => result::fail(path, self.expected.as_str()),
        }
    }
}

/// Accepts any JSON number, as `f64`.
#[derive(Debug, Clone)]
pub struct NumberSanitizer {
    expected: String,
}

impl NumberSanitizer {
    /// Creates a number sanitizer reporting `"number"` on mismatch.
    pub fn new() -> Self {
        Self {
            expected: "number".to_string(),
        }
    }

    /// Overrides the expectation reported on mismatch.
    pub fn expecting(mut self, expected: impl Into<String>) -> Self {
        self.expected = expected.into();
        self
    }
}

impl Default for NumberSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer for NumberSanitizer {
    type Output = f64;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<f64> {
        match value.as_f64() {
            Some(n) => result::ok(n),
            None => result::fail(path, self.expected.as_str()),
        }
    }
}

/// Accepts JSON numbers that are integers representable as `i64`.
///
/// Floats are rejected even when they have no fractional part (`1.0`), in
/// line with how the raw JSON distinguishes them.
#[derive(Debug, Clone)]
pub struct IntegerSanitizer {
    expected: String,
}

impl IntegerSanitizer {
    /// Creates an integer sanitizer reporting `"integer"` on mismatch.
    pub fn new() -> Self {
        Self {
            expected: "integer".to_string(),
        }
    }

    /// Overrides the expectation reported on mismatch.
    pub fn expecting(mut self, expected: impl Into<String>) -> Self {
        self.expected = expected.into();
        self
    }
}

impl Default for IntegerSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer for IntegerSanitizer {
    type Output = i64;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<i64> {
        match value.as_i64() {
            Some(n) => result::ok(n),
            None => result::fail(path, self.expected.as_str()),
        }
    }
}

/// Accepts JSON booleans.
#[derive(Debug, Clone)]
pub struct BooleanSanitizer {
    expected: String,
}

impl BooleanSanitizer {
    /// Creates a boolean sanitizer reporting `"boolean"` on mismatch.
    pub fn new() -> Self {
        Self {
            expected: "boolean".to_string(),
        }
    }

    /// Overrides the expectation reported on mismatch.
    pub fn expecting(mut self, expected: impl Into<String>) -> Self {
        self.expected = expected.into();
        self
    }
}

impl Default for BooleanSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer for BooleanSanitizer {
    type Output = bool;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<bool> {
        match value {
            Value::Bool(b) => result::ok(*b),
            _ => result::fail(path, self.expected.as_str()),
        }
    }
}

/// Accepts exactly one literal value.
///
/// The default expectation is `exactly <literal>`, with the literal rendered
/// as JSON (`exactly "card"`, `exactly 3`).
#[derive(Debug, Clone)]
pub struct ExactSanitizer {
    literal: Value,
    expected: String,
}

impl ExactSanitizer {
    /// Creates a sanitizer accepting only `literal`.
    pub fn new(literal: impl Into<Value>) -> Self {
        let literal = literal.into();
        let expected = format!("exactly {}", literal);
        Self { literal, expected }
    }

    /// Overrides the expectation reported on mismatch.
    pub fn expecting(mut self, expected: impl Into<String>) -> Self {
        self.expected = expected.into();
        self
    }
}

impl Sanitizer for ExactSanitizer {
    type Output = Value;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<Value> {
        if value == &self.literal {
            result::ok(value.clone())
        } else {
            result::fail(path, self.expected.as_str())
        }
    }
}
