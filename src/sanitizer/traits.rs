//! Traits for sanitizer polymorphism.
//!
//! This module provides the [`Sanitizer`] trait every sanitizer implements,
//! the [`SanitizerExt`] extension methods used to compose them, and
//! [`BoxedSanitizer`] for type-erased storage.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::result::SanitizeResult;

use super::combinators::{Check, FlatMap, Map, Or};

/// A function from an untyped value and a path to a typed result.
///
/// A sanitizer either succeeds with its `Output` or fails with one or more
/// [`ErrorEntry`](crate::ErrorEntry) records; it never panics on bad input.
/// Implementations hold no mutable state, so the `Send + Sync` bounds let a
/// single sanitizer be shared by any number of threads.
///
/// Any closure `Fn(&Value, &str) -> SanitizeResult<T>` is a sanitizer:
///
/// ```rust
/// use sanitizers::{result, Sanitizer};
/// use serde_json::{json, Value};
///
/// let non_null = |value: &Value, path: &str| {
///     if value.is_null() {
///         result::fail(path, "non-null value")
///     } else {
///         result::ok(value.clone())
///     }
/// };
///
/// assert!(non_null.sanitize(&json!(1), "").is_success());
/// assert!(non_null.sanitize(&json!(null), "").is_failure());
/// ```
pub trait Sanitizer: Send + Sync {
    /// The typed value produced on success.
    type Output;

    /// Checks `value`, reporting failures at `path`.
    ///
    /// `path` is opaque to the sanitizer: it is copied verbatim into every
    /// entry reported for this value.
    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<Self::Output>;
}

impl<T, F> Sanitizer for F
where
    F: Fn(&Value, &str) -> SanitizeResult<T> + Send + Sync,
{
    type Output = T;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<T> {
        self(value, path)
    }
}

/// Composition methods available on every sanitizer.
pub trait SanitizerExt: Sanitizer + Sized {
    /// Chains a dependent stage after this sanitizer.
    ///
    /// See [`flat_map`](crate::flat_map).
    fn flat_map<U, F>(self, continuation: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output, &str) -> SanitizeResult<U> + Send + Sync,
    {
        FlatMap::new(self, continuation)
    }

    /// Transforms the successful output. `f` cannot fail.
    ///
    /// ```rust
    /// use sanitizers::{string, Sanitizer, SanitizerExt};
    /// use serde_json::json;
    ///
    /// let length = string().map(|s| s.chars().count());
    /// assert_eq!(length.sanitize(&json!("héllo"), "").into_result(), Ok(5));
    /// ```
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U + Send + Sync,
    {
        Map::new(self, f)
    }

    /// Keeps the output only if `predicate` holds, otherwise fails with
    /// `expected` at the current path.
    ///
    /// ```rust
    /// use sanitizers::{integer, Sanitizer, SanitizerExt};
    /// use serde_json::json;
    ///
    /// let port = integer().check(|p| (1..=65535).contains(p), "port number");
    /// assert!(port.sanitize(&json!(8080), "port").is_success());
    ///
    /// let errors = port.sanitize(&json!(0), "port").into_result().unwrap_err();
    /// assert_eq!(errors.first().expected, "port number");
    /// ```
    fn check<P>(self, predicate: P, expected: impl Into<String>) -> Check<Self, P>
    where
        P: Fn(&Self::Output) -> bool + Send + Sync,
    {
        Check::new(self, predicate, expected)
    }

    /// Falls back to `other` when this sanitizer fails.
    fn or<R>(self, other: R) -> Or<Self, R>
    where
        R: Sanitizer<Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Erases the concrete type.
    fn boxed(self) -> BoxedSanitizer<Self::Output>
    where
        Self: 'static,
    {
        BoxedSanitizer::new(self)
    }
}

impl<S: Sanitizer> SanitizerExt for S {}

/// A shareable, type-erased sanitizer.
///
/// Cloning is cheap: clones share the same underlying sanitizer.
pub struct BoxedSanitizer<T>(Arc<dyn Sanitizer<Output = T>>);

impl<T> BoxedSanitizer<T> {
    /// Wraps `sanitizer`.
    pub fn new<S>(sanitizer: S) -> Self
    where
        S: Sanitizer<Output = T> + 'static,
    {
        Self(Arc::new(sanitizer))
    }
}

impl<T> Clone for BoxedSanitizer<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for BoxedSanitizer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedSanitizer")
    }
}

impl<T> Sanitizer for BoxedSanitizer<T> {
    type Output = T;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<T> {
        self.0.sanitize(value, path)
    }
}

/// Builds a sanitizer from a closure.
///
/// Plain closures already implement [`Sanitizer`]; this helper only pins the
/// closure's argument types so they don't need annotations.
pub fn from_fn<T, F>(f: F) -> F
where
    F: Fn(&Value, &str) -> SanitizeResult<T> + Send + Sync,
{
    f
}
