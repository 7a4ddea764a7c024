//! Parallel sanitization of independent inputs.
//!
//! Sanitizers share no mutable state, so one sanitizer can check many
//! unrelated values at once. This module runs a sanitizer over a slice of
//! inputs on the rayon thread pool, the way a data-ingestion layer would
//! check a batch of records.
//!
//! # Example
//!
//! ```rust
//! use sanitizers::batch::sanitize_all;
//! use sanitizers::{integer, object, string};
//! use serde_json::json;
//!
//! let record = object().field("id", integer()).field("name", string());
//! let rows = vec![
//!     json!({"id": 1, "name": "a"}),
//!     json!({"id": "2", "name": "b"}),
//! ];
//!
//! let errors = sanitize_all(&record, &rows, "rows").into_result().unwrap_err();
//! assert_eq!(errors.first().path, "rows[1].id");
//! ```

use rayon::prelude::*;
use serde_json::Value;

use crate::path;
use crate::result::{self, SanitizeResult};
use crate::sanitizer::Sanitizer;

/// Sanitizes every value in parallel, element `i` at `path[i]`.
///
/// Returns one result per input, in input order. Each result is identical
/// to what `sanitizer.sanitize(&values[i], &path::index(path, i))` returns.
pub fn sanitize_batch<S>(
    sanitizer: &S,
    values: &[Value],
    path: &str,
) -> Vec<SanitizeResult<S::Output>>
where
    S: Sanitizer,
    S::Output: Send,
{
    values
        .par_iter()
        .enumerate()
        .map(|(i, value)| sanitizer.sanitize(value, &path::index(path, i)))
        .collect()
}

/// Sanitizes every value in parallel and merges the outcomes.
///
/// Succeeds with all outputs in input order, or fails with every entry from
/// every failing element, also in input order.
pub fn sanitize_all<S>(
    sanitizer: &S,
    values: &[Value],
    path: &str,
) -> SanitizeResult<Vec<S::Output>>
where
    S: Sanitizer,
    S::Output: Send,
{
    let results = sanitize_batch(sanitizer, values, path);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        path,
        inputs = values.len(),
        failed = results.iter().filter(|r| r.is_failure()).count(),
        "batch sanitized"
    );

    result::merge(results)
}
