//! Sanitizer definitions.
//!
//! This module provides the [`Sanitizer`] contract and the constructors for
//! every built-in sanitizer. Primitive sanitizers check a single runtime type
//! and fail with one entry; combinators build new sanitizers out of existing
//! ones; structural sanitizers descend into arrays and objects and collect
//! every failure below them.
//!
//! # Example
//!
//! ```rust
//! use sanitizers::{flat_map, result, string, Sanitizer};
//! use serde_json::json;
//!
//! let in_array = flat_map(string(), |x, _| result::ok(vec![x]));
//!
//! assert_eq!(
//!     in_array.sanitize(&json!("abc"), ""),
//!     result::ok(vec!["abc".to_string()])
//! );
//! assert_eq!(
//!     in_array.sanitize(&json!(false), "path"),
//!     result::fail("path", "string")
//! );
//! ```

mod array;
mod combinators;
mod object;
mod pattern;
mod primitive;
mod traits;

use serde_json::Value;

use crate::result::SanitizeResult;

pub use array::ArraySanitizer;
pub use combinators::{Check, FlatMap, Map, Nullable, Or};
pub use object::{Fields, ObjectSanitizer};
pub use pattern::MatchingSanitizer;
pub use primitive::{
    BooleanSanitizer, ExactSanitizer, IntegerSanitizer, NumberSanitizer, StringSanitizer,
};
pub use traits::{from_fn, BoxedSanitizer, Sanitizer, SanitizerExt};

/// Creates a sanitizer accepting JSON strings.
///
/// On a mismatch the result holds one entry `{ path, expected: "string" }`.
pub fn string() -> StringSanitizer {
    StringSanitizer::new()
}

/// Creates a sanitizer accepting any JSON number as `f64`.
pub fn number() -> NumberSanitizer {
    NumberSanitizer::new()
}

/// Creates a sanitizer accepting integers representable as `i64`.
pub fn integer() -> IntegerSanitizer {
    IntegerSanitizer::new()
}

/// Creates a sanitizer accepting JSON booleans.
pub fn boolean() -> BooleanSanitizer {
    BooleanSanitizer::new()
}

/// Creates a sanitizer accepting only `literal`.
///
/// ```rust
/// use sanitizers::{exact, Sanitizer};
/// use serde_json::json;
///
/// let version = exact(2);
/// assert!(version.sanitize(&json!(2), "").is_success());
/// assert!(version.sanitize(&json!(1), "").is_failure());
/// ```
pub fn exact(literal: impl Into<Value>) -> ExactSanitizer {
    ExactSanitizer::new(literal)
}

/// Creates a sanitizer accepting strings that match `pattern`.
///
/// Returns an error if the regex pattern is invalid.
pub fn matching(pattern: &str) -> Result<MatchingSanitizer, regex::Error> {
    MatchingSanitizer::new(pattern)
}

/// Creates a sanitizer for arrays whose items all pass `item`.
pub fn array<S: Sanitizer>(item: S) -> ArraySanitizer<S> {
    ArraySanitizer::new(item)
}

/// Creates an object sanitizer with no fields.
///
/// Use the builder methods on [`ObjectSanitizer`] to declare fields.
pub fn object() -> ObjectSanitizer {
    ObjectSanitizer::new()
}

/// Accepts `null` as `None`, otherwise defers to `inner`.
pub fn nullable<S: Sanitizer>(inner: S) -> Nullable<S> {
    Nullable::new(inner)
}

/// Builds a sanitizer that runs `base`, then `continuation` on its output.
///
/// Every time the returned sanitizer is invoked with `(value, path)`:
/// 1. `base` is run on `(value, path)`.
/// 2. If it fails, that failure is returned unchanged and `continuation`
///    is never called.
/// 3. If it succeeds with `a`, the result of `continuation(a, path)` is
///    returned directly.
///
/// The continuation may run a second, independent check with its own error
/// vocabulary, or a pure transformation that always succeeds.
///
/// # Example
///
/// ```rust
/// use sanitizers::{flat_map, result, string, Sanitizer};
/// use serde_json::json;
///
/// let not_hello = flat_map(string(), |value, path| {
///     if value == "hello" {
///         result::fail(path, format!("not {}", value))
///     } else {
///         result::ok(value)
///     }
/// });
///
/// assert_eq!(
///     not_hello.sanitize(&json!("hello"), "path"),
///     result::fail("path", "not hello")
/// );
/// ```
pub fn flat_map<S, F, U>(base: S, continuation: F) -> FlatMap<S, F>
where
    S: Sanitizer,
    F: Fn(S::Output, &str) -> SanitizeResult<U> + Send + Sync,
{
    FlatMap::new(base, continuation)
}
