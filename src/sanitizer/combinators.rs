//! Sanitizer combinators.
//!
//! This module provides the combinators that build new sanitizers out of
//! existing ones:
//! - [`FlatMap`]: run a dependent stage after a successful base (fail fast)
//! - [`Map`]: transform a successful output
//! - [`Check`]: refine an output with a predicate
//! - [`Or`]: fall back to a second sanitizer
//! - [`Nullable`]: accept `null` as `None`
//!
//! # Example
//!
//! ```rust
//! use sanitizers::{result, string, Sanitizer, SanitizerExt};
//! use serde_json::json;
//!
//! // First confirm a string, then parse it, then check the parsed value.
//! let port = string()
//!     .flat_map(|s, path| match s.parse::<u16>() {
//!         Ok(port) => result::ok(port),
//!         Err(_) => result::fail(path, "numeric string"),
//!     })
//!     .check(|port| *port >= 1024, "unprivileged port");
//!
//! assert_eq!(port.sanitize(&json!("8080"), "port").into_result(), Ok(8080));
//! assert!(port.sanitize(&json!("80"), "port").is_failure());
//! ```

use serde_json::Value;
use stillwater::prelude::*;
use stillwater::Validation;

use crate::result::{self, SanitizeResult};

use super::traits::Sanitizer;

/// A sanitizer followed by a dependent stage.
///
/// Created by [`flat_map`](crate::flat_map) or
/// [`SanitizerExt::flat_map`](super::SanitizerExt::flat_map).
///
/// On every invocation the base runs first. A base failure is returned
/// unchanged and the continuation never runs. On success the continuation
/// receives the base output and the same path, and its result is returned
/// as is: a continuation failure replaces the base success entirely.
#[derive(Debug, Clone)]
pub struct FlatMap<S, F> {
    base: S,
    continuation: F,
}

impl<S, F> FlatMap<S, F> {
    /// Creates a new `FlatMap` from a base sanitizer and a continuation.
    pub fn new(base: S, continuation: F) -> Self {
        Self { base, continuation }
    }

    /// Returns a reference to the base sanitizer.
    pub fn base(&self) -> &S {
        &self.base
    }

    /// Extracts the base sanitizer and the continuation.
    pub fn into_parts(self) -> (S, F) {
        (self.base, self.continuation)
    }
}

impl<S, F, U> Sanitizer for FlatMap<S, F>
where
    S: Sanitizer,
    F: Fn(S::Output, &str) -> SanitizeResult<U> + Send + Sync,
{
    type Output = U;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<U> {
        match self.base.sanitize(value, path) {
            Validation::Success(output) => (self.continuation)(output, path),
            Validation::Failure(entries) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    path,
                    errors = entries.len(),
                    "base sanitizer failed, continuation skipped"
                );
                Validation::Failure(entries)
            }
        }
    }
}

/// A sanitizer whose successful output is transformed by an infallible
/// function.
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F> Map<S, F> {
    /// Creates a new `Map`.
    pub fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }
}

impl<S, F, U> Sanitizer for Map<S, F>
where
    S: Sanitizer,
    F: Fn(S::Output) -> U + Send + Sync,
{
    type Output = U;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<U> {
        result::map(self.inner.sanitize(value, path), &self.f)
    }
}

/// A sanitizer refined by a predicate over its output.
#[derive(Debug, Clone)]
pub struct Check<S, P> {
    inner: S,
    predicate: P,
    expected: String,
}

impl<S, P> Check<S, P> {
    /// Creates a new `Check` reporting `expected` when `predicate` rejects.
    pub fn new(inner: S, predicate: P, expected: impl Into<String>) -> Self {
        Self {
            inner,
            predicate,
            expected: expected.into(),
        }
    }
}

impl<S, P> Sanitizer for Check<S, P>
where
    S: Sanitizer,
    P: Fn(&S::Output) -> bool + Send + Sync,
{
    type Output = S::Output;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<S::Output> {
        match self.inner.sanitize(value, path) {
            Validation::Success(output) if (self.predicate)(&output) => result::ok(output),
            Validation::Success(_) => result::fail(path, self.expected.as_str()),
            Validation::Failure(entries) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    path,
                    errors = entries.len(),
                    "inner sanitizer failed, predicate skipped"
                );
                Validation::Failure(entries)
            }
        }
    }
}

/// Tries one sanitizer, then another.
///
/// The first success wins. If both fail, the entries of both are reported,
/// left first, so the caller sees every alternative that was attempted.
#[derive(Debug, Clone)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or`.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Sanitizer for Or<L, R>
where
    L: Sanitizer,
    R: Sanitizer<Output = L::Output>,
{
    type Output = L::Output;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<L::Output> {
        match self.left.sanitize(value, path) {
            Validation::Success(output) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(path, "left sanitizer succeeded, alternative skipped");
                result::ok(output)
            }
            Validation::Failure(left) => match self.right.sanitize(value, path) {
                Validation::Success(output) => result::ok(output),
                Validation::Failure(right) => result::error(left.combine(right)),
            },
        }
    }
}

/// Accepts `null` as `None`; anything else goes through the inner sanitizer.
///
/// Created by [`nullable`](crate::nullable).
#[derive(Debug, Clone)]
pub struct Nullable<S> {
    inner: S,
}

impl<S> Nullable<S> {
    /// Creates a new `Nullable`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns the wrapped sanitizer.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sanitizer> Sanitizer for Nullable<S> {
    type Output = Option<S::Output>;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<Option<S::Output>> {
        if value.is_null() {
            result::ok(None)
        } else {
            self.inner.sanitize(value, path).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorEntry;
    use crate::sanitizer::{integer, string, SanitizerExt};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_flat_map_wraps_value() {
        let in_array = FlatMap::new(string(), |x: String, _: &str| result::ok(vec![x]));
        assert_eq!(
            in_array.sanitize(&json!("abc"), ""),
            result::ok(vec!["abc".to_string()])
        );
    }

    #[test]
    fn test_flat_map_returns_base_errors() {
        let in_array = FlatMap::new(string(), |x: String, _: &str| result::ok(vec![x]));
        assert_eq!(
            in_array.sanitize(&json!(false), "path"),
            result::fail("path", "string")
        );
    }

    #[test]
    fn test_flat_map_returns_continuation_errors() {
        let rejecting = FlatMap::new(string(), |v: String, path: &str| {
            result::fail::<()>(path, format!("not {}", v))
        });
        assert_eq!(
            rejecting.sanitize(&json!("hello"), "path"),
            result::fail("path", "not hello")
        );
    }

    #[test]
    fn test_flat_map_skips_continuation_on_failure() {
        let calls = AtomicUsize::new(0);
        let counted = FlatMap::new(string(), |x: String, _: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            result::ok(x)
        });

        assert!(counted.sanitize(&json!(1), "").is_failure());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(counted.sanitize(&json!("a"), "").is_success());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_flat_map_passes_path_through() {
        let echo = FlatMap::new(string(), |_: String, path: &str| {
            result::ok(path.to_string())
        });
        assert_eq!(
            echo.sanitize(&json!("x"), "a.b"),
            result::ok("a.b".to_string())
        );
    }

    #[test]
    fn test_map_transforms_success() {
        let upper = string().map(|s| s.to_uppercase());
        assert_eq!(
            upper.sanitize(&json!("abc"), ""),
            result::ok("ABC".to_string())
        );
        assert_eq!(upper.sanitize(&json!(3), "x"), result::fail("x", "string"));
    }

    #[test]
    fn test_check_accepts_and_rejects() {
        let non_empty = string().check(|s| !s.is_empty(), "non-empty string");

        assert!(non_empty.sanitize(&json!("a"), "").is_success());
        assert_eq!(
            non_empty.sanitize(&json!(""), "name"),
            result::fail("name", "non-empty string")
        );
        // Type errors come from the inner sanitizer.
        assert_eq!(
            non_empty.sanitize(&json!(null), "name"),
            result::fail("name", "string")
        );
    }

    #[test]
    fn test_or_first_success_wins() {
        let id = integer().map(|i| i.to_string()).or(string());

        assert_eq!(id.sanitize(&json!(7), ""), result::ok("7".to_string()));
        assert_eq!(
            id.sanitize(&json!("u-7"), ""),
            result::ok("u-7".to_string())
        );
    }

    #[test]
    fn test_or_reports_both_failures() {
        let id = integer().map(|i| i.to_string()).or(string());
        let errors = id.sanitize(&json!(true), "id").into_result().unwrap_err();

        assert_eq!(
            errors.into_vec(),
            vec![ErrorEntry::new("id", "integer"), ErrorEntry::new("id", "string")]
        );
    }

    #[test]
    fn test_nullable() {
        let maybe_name = Nullable::new(string());

        assert_eq!(maybe_name.sanitize(&json!(null), ""), result::ok(None));
        assert_eq!(
            maybe_name.sanitize(&json!("a"), ""),
            result::ok(Some("a".to_string()))
        );
        assert_eq!(
            maybe_name.sanitize(&json!(1), "n"),
            result::fail("n", "string")
        );
    }
}
