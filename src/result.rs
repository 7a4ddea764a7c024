//! The result algebra shared by every sanitizer.
//!
//! A sanitizer outcome is a [`SanitizeResult<T>`]: either
//! `Validation::Success(value)` or `Validation::Failure(entries)` with at least
//! one [`ErrorEntry`]. The free functions here are the constructors and
//! combinators the rest of the crate is written against.

use stillwater::prelude::*;
use stillwater::Validation;

use crate::error::{EmptyErrorList, ErrorEntries, ErrorEntry};

/// Outcome of running a sanitizer.
///
/// Equality is structural: two results are equal when they are the same
/// variant and carry equal values, or equal entry lists in the same order.
pub type SanitizeResult<T> = Validation<T, ErrorEntries>;

/// Constructs a successful result.
///
/// ```rust
/// use sanitizers::result::ok;
/// use stillwater::Validation;
///
/// assert_eq!(ok::<_>(3), Validation::Success(3));
/// ```
#[inline]
pub fn ok<T>(value: T) -> SanitizeResult<T> {
    Validation::Success(value)
}

/// Constructs a failed result from a non-empty list of entries.
#[inline]
pub fn error<T>(entries: impl Into<ErrorEntries>) -> SanitizeResult<T> {
    Validation::Failure(entries.into())
}

/// Constructs a failed result holding a single entry.
///
/// This is the shape every primitive sanitizer returns on a mismatch.
///
/// ```rust
/// use sanitizers::result::fail;
/// use sanitizers::ErrorEntry;
///
/// let result = fail::<String>("user.name", "string");
/// assert_eq!(
///     sanitizers::result::entries(&result).unwrap().first(),
///     &ErrorEntry::new("user.name", "string")
/// );
/// ```
#[inline]
pub fn fail<T>(path: impl Into<String>, expected: impl Into<String>) -> SanitizeResult<T> {
    error(ErrorEntry::new(path, expected))
}

/// Constructs a failed result from a `Vec` of entries.
///
/// Returns `Err(EmptyErrorList)` when `entries` is empty, since a failure
/// without a reason is not representable.
pub fn try_error<T>(entries: Vec<ErrorEntry>) -> Result<SanitizeResult<T>, EmptyErrorList> {
    ErrorEntries::try_from_vec(entries).map(Validation::Failure)
}

/// Applies `f` to a successful value; failures pass through untouched and
/// `f` is not called.
#[inline]
pub fn map<T, U, F>(result: SanitizeResult<T>, f: F) -> SanitizeResult<U>
where
    F: FnOnce(T) -> U,
{
    result.map(f)
}

/// Borrows the failure entries, if any.
pub fn entries<T>(result: &SanitizeResult<T>) -> Option<&ErrorEntries> {
    match result {
        Validation::Success(_) => None,
        Validation::Failure(entries) => Some(entries),
    }
}

/// Combines independent results.
///
/// Succeeds with every value, in input order, when all inputs succeed.
/// Otherwise fails with the concatenation of every failure's entries, also in
/// input order. Successful values next to a failure are discarded.
///
/// # Example
///
/// ```rust
/// use sanitizers::result::{fail, merge, ok};
/// use stillwater::Validation;
///
/// assert_eq!(merge(vec![ok(1), ok(2)]), Validation::Success(vec![1, 2]));
///
/// let merged = merge(vec![fail::<i32>("a", "x"), ok(2), fail("b", "y")]);
/// let paths: Vec<_> = sanitizers::result::entries(&merged)
///     .unwrap()
///     .iter()
///     .map(|e| e.path.clone())
///     .collect();
/// assert_eq!(paths, vec!["a", "b"]);
/// ```
pub fn merge<T, I>(results: I) -> SanitizeResult<Vec<T>>
where
    I: IntoIterator<Item = SanitizeResult<T>>,
{
    let mut values = Vec::new();
    let mut failures: Option<ErrorEntries> = None;

    for result in results {
        match result {
            Validation::Success(value) => values.push(value),
            Validation::Failure(entries) => {
                failures = Some(match failures {
                    Some(acc) => acc.combine(entries),
                    None => entries,
                });
            }
        }
    }

    match failures {
        Some(entries) => Validation::Failure(entries),
        None => Validation::Success(values),
    }
}
