//! Error types for sanitizer failures.
//!
//! This module provides the structured failure record produced by sanitizers
//! and the non-empty, ordered collection carried by failed results.

mod entry;

pub use entry::{EmptyErrorList, ErrorEntries, ErrorEntry};
