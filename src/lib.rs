//! # Sanitizers
//!
//! Composable sanitizers that turn untyped input into typed values, with
//! location-aware errors when the input is not shaped as required.
//!
//! ## Overview
//!
//! A sanitizer is a pure function from a raw [`serde_json::Value`] and a path
//! label to a [`SanitizeResult`]: either the typed value, or a non-empty list
//! of [`ErrorEntry`] records saying where the input failed and what was
//! expected there. Sanitizers are built from small primitives and composed
//! with combinators, most importantly [`flat_map`], which chains a dependent
//! stage after a successful one and fails fast otherwise.
//!
//! ## Core Types
//!
//! - [`SanitizeResult`]: success with a value, or failure with [`ErrorEntries`]
//! - [`ErrorEntry`]: `{ path, expected }`, one failure
//! - [`Sanitizer`]: the `(value, path) -> SanitizeResult` contract
//! - [`flat_map`]: monadic composition of sanitizers
//!
//! ## Example
//!
//! ```rust
//! use sanitizers::{integer, object, result, string, Sanitizer, SanitizerExt};
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq)]
//! struct Signup {
//!     name: String,
//!     age: i64,
//! }
//!
//! let signup = object()
//!     .field("name", string().check(|s| !s.is_empty(), "non-empty string"))
//!     .field("age", integer().check(|age| *age >= 18, "adult age"))
//!     .map(|fields| Signup {
//!         name: fields["name"].as_str().unwrap_or_default().to_string(),
//!         age: fields["age"].as_i64().unwrap_or_default(),
//!     });
//!
//! let result = signup.sanitize(&json!({"name": "Ada", "age": 36}), "body");
//! assert_eq!(result, result::ok(Signup { name: "Ada".into(), age: 36 }));
//!
//! // Every failing field is reported, each at its own path.
//! let errors = signup
//!     .sanitize(&json!({"name": "", "age": 12}), "body")
//!     .into_result()
//!     .unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.first().path, "body.name");
//! ```

pub mod batch;
pub mod error;
pub mod path;
pub mod result;
pub mod sanitizer;

pub use error::{EmptyErrorList, ErrorEntries, ErrorEntry};
pub use result::SanitizeResult;
pub use sanitizer::{
    array, boolean, exact, flat_map, from_fn, integer, matching, nullable, number, object, string,
    ArraySanitizer, BooleanSanitizer, BoxedSanitizer, Check, ExactSanitizer, Fields, FlatMap,
    IntegerSanitizer, Map, MatchingSanitizer, Nullable, NumberSanitizer, ObjectSanitizer, Or,
    Sanitizer, SanitizerExt, StringSanitizer,
};
