//! Sanitizer failure records.
//!
//! This module provides [`ErrorEntry`] for a single failure and
//! [`ErrorEntries`] for the non-empty, ordered list a failed result carries.

use std::fmt::{self, Display};

use serde_json::{json, Value};
use stillwater::prelude::*;

/// A single sanitizer failure.
///
/// `ErrorEntry` is the stable contract adapter layers render into
/// user-facing messages:
/// - **path**: where in the input the failure occurred, exactly as supplied
///   by the caller (empty for the root value)
/// - **expected**: what was required at that location
///
/// # Example
///
/// ```rust
/// use sanitizers::ErrorEntry;
///
/// let entry = ErrorEntry::new("user.email", "string");
///
/// assert_eq!(entry.path, "user.email");
/// assert_eq!(entry.expected, "string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorEntry {
    /// The caller-supplied locator of the failing value.
    pub path: String,
    /// Description of what was expected at `path`.
    pub expected: String,
}

impl ErrorEntry {
    /// Creates a new entry for the given path and expectation.
    pub fn new(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Returns true if this entry points at the root value.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Renders this entry as `{"path": ..., "expected": ...}`.
    pub fn to_json(&self) -> Value {
        json!({
            "path": self.path,
            "expected": self.expected,
        })
    }
}

impl Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "(root): expected {}", self.expected)
        } else {
            write!(f, "{}: expected {}", self.path, self.expected)
        }
    }
}

impl std::error::Error for ErrorEntry {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorEntry>();
    assert_sync::<ErrorEntry>();
};

/// Returned when a failure is built from an empty list of entries.
///
/// A failed result always carries at least one entry; see
/// [`ErrorEntries::try_from_vec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a failed result requires at least one error entry")]
pub struct EmptyErrorList;

/// A non-empty, ordered collection of error entries.
///
/// `ErrorEntries` wraps a `NonEmptyVec<ErrorEntry>` so a failure can never be
/// constructed without a reason. Entries keep the order in which they were
/// produced.
///
/// # Combining Errors
///
/// `ErrorEntries` implements `Semigroup`; `combine` appends the right-hand
/// entries after the left-hand ones. Structural sanitizers use this to report
/// every failing field at once:
///
/// ```rust
/// use sanitizers::{ErrorEntries, ErrorEntry};
/// use stillwater::prelude::*;
///
/// let name = ErrorEntries::single(ErrorEntry::new("name", "string"));
/// let age = ErrorEntries::single(ErrorEntry::new("age", "integer"));
///
/// let combined = name.combine(age);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().path, "name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntries(NonEmptyVec<ErrorEntry>);

impl ErrorEntries {
    /// Creates a collection holding one entry.
    pub fn single(entry: ErrorEntry) -> Self {
        Self(NonEmptyVec::singleton(entry))
    }

    /// Creates a collection from a `NonEmptyVec` of entries.
    pub fn from_non_empty(entries: NonEmptyVec<ErrorEntry>) -> Self {
        Self(entries)
    }

    /// Creates a collection from a `Vec`, rejecting an empty one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sanitizers::{EmptyErrorList, ErrorEntries, ErrorEntry};
    ///
    /// assert_eq!(ErrorEntries::try_from_vec(vec![]), Err(EmptyErrorList));
    ///
    /// let entries = ErrorEntries::try_from_vec(vec![ErrorEntry::new("", "string")]).unwrap();
    /// assert_eq!(entries.len(), 1);
    /// ```
    pub fn try_from_vec(entries: Vec<ErrorEntry>) -> Result<Self, EmptyErrorList> {
        NonEmptyVec::from_vec(entries)
            .map(Self)
            .ok_or(EmptyErrorList)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.0.iter()
    }

    /// Returns all entries reported at exactly `path`.
    pub fn at_path(&self, path: &str) -> Vec<&ErrorEntry> {
        self.0.iter().filter(|e| e.path == path).collect()
    }

    /// Returns the first entry.
    pub fn first(&self) -> &ErrorEntry {
        self.0.head()
    }

    /// Converts this collection into a `Vec<ErrorEntry>`.
    pub fn into_vec(self) -> Vec<ErrorEntry> {
        self.0.into_vec()
    }

    /// Returns a reference to the underlying `NonEmptyVec`.
    pub fn as_non_empty_vec(&self) -> &NonEmptyVec<ErrorEntry> {
        &self.0
    }

    /// Renders the entries as a JSON array of `{"path", "expected"}` objects.
    ///
    /// This is the payload shape adapters send back for rejected input.
    ///
    /// ```rust
    /// use sanitizers::{ErrorEntries, ErrorEntry};
    /// use serde_json::json;
    ///
    /// let entries = ErrorEntries::single(ErrorEntry::new("id", "integer"));
    /// assert_eq!(entries.to_json(), json!([{"path": "id", "expected": "integer"}]));
    /// ```
    pub fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ErrorEntry::to_json).collect())
    }
}

impl From<ErrorEntry> for ErrorEntries {
    fn from(entry: ErrorEntry) -> Self {
        Self::single(entry)
    }
}

impl TryFrom<Vec<ErrorEntry>> for ErrorEntries {
    type Error = EmptyErrorList;

    fn try_from(entries: Vec<ErrorEntry>) -> Result<Self, Self::Error> {
        Self::try_from_vec(entries)
    }
}

impl Semigroup for ErrorEntries {
    fn combine(self, other: Self) -> Self {
        ErrorEntries(self.0.combine(other.0))
    }
}

impl Display for ErrorEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sanitization failed with {} error(s):", self.len())?;
        for (i, entry) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, entry)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorEntries {}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorEntries {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl IntoIterator for ErrorEntries {
    type Item = ErrorEntry;
    type IntoIter = std::vec::IntoIter<ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorEntries {
    type Item = &'a ErrorEntry;
    type IntoIter = Box<dyn Iterator<Item = &'a ErrorEntry> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    const fn assert_total_eq<T: Eq>() {}
    assert_send::<ErrorEntries>();
    assert_sync::<ErrorEntries>();
    assert_total_eq::<stillwater::Validation<String, ErrorEntries>>();
};
