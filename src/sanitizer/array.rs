//! Array sanitization.
//!
//! This module provides [`ArraySanitizer`], which applies an item sanitizer
//! to every element and reports all failing elements together.

use serde_json::Value;

use crate::path;
use crate::result::{self, SanitizeResult};

use super::traits::Sanitizer;

/// A sanitizer for arrays of homogeneous items.
///
/// Non-arrays fail with a single `"array"` entry. Otherwise each element is
/// sanitized at `path[i]`; element failures are collected in index order
/// rather than stopping at the first.
///
/// # Example
///
/// ```rust
/// use sanitizers::{array, integer, Sanitizer};
/// use serde_json::json;
///
/// let ids = array(integer());
///
/// assert_eq!(ids.sanitize(&json!([1, 2, 3]), "ids").into_result(), Ok(vec![1, 2, 3]));
///
/// let errors = ids.sanitize(&json!([1, "two", 3.5]), "ids").into_result().unwrap_err();
/// let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
/// assert_eq!(paths, vec!["ids[1]", "ids[2]"]);
/// ```
#[derive(Debug, Clone)]
pub struct ArraySanitizer<S> {
    item: S,
    expected: String,
}

impl<S: Sanitizer> ArraySanitizer<S> {
    /// Creates an array sanitizer with the given item sanitizer.
    pub fn new(item: S) -> Self {
        Self {
            item,
            expected: "array".to_string(),
        }
    }

    /// Overrides the expectation reported when the value is not an array.
    pub fn expecting(mut self, expected: impl Into<String>) -> Self {
        self.expected = expected.into();
        self
    }
}

impl<S: Sanitizer> Sanitizer for ArraySanitizer<S> {
    type Output = Vec<S::Output>;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<Vec<S::Output>> {
        let items = match value.as_array() {
            Some(items) => items,
            None => return result::fail(path, self.expected.as_str()),
        };

        let merged = result::merge(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| self.item.sanitize(item, &path::index(path, index))),
        );

        #[cfg(feature = "tracing")]
        if let Some(entries) = result::entries(&merged) {
            tracing::debug!(
                path,
                items = items.len(),
                errors = entries.len(),
                "array failed sanitization"
            );
        }

        merged
    }
}
