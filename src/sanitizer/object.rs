//! Object sanitization.
//!
//! This module provides [`ObjectSanitizer`] for checking JSON objects field
//! by field, with required and optional fields and control over unknown
//! keys.

use std::ops::Deref;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::path;
use crate::result::{self, SanitizeResult};

use super::traits::Sanitizer;

/// Stands in for a missing required field.
static NULL: Value = Value::Null;

/// A type-erased field sanitizer producing a raw value.
type FieldFn = Box<dyn Fn(&Value, &str) -> SanitizeResult<Value> + Send + Sync>;

/// The output of an [`ObjectSanitizer`].
///
/// Holds the sanitized fields in declaration order, followed by any
/// passed-through keys in the input map's iteration order. Dereferences to
/// the underlying `IndexMap`, so `fields["name"]`, `get` and `keys` work
/// directly.
/// Converting into a [`Value`] yields a JSON object, which is what lets one
/// object sanitizer be a field of another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(IndexMap<String, Value>);

impl Fields {
    /// Creates an empty set of fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying map.
    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.0
    }
}

impl Deref for Fields {
    type Target = IndexMap<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<(String, Value)> for Fields {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Fields {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Fields> for Value {
    fn from(fields: Fields) -> Self {
        Value::Object(fields.into_iter().collect())
    }
}

/// Definition of a field within an object sanitizer.
struct FieldDef {
    sanitizer: FieldFn,
    required: bool,
}

/// A sanitizer for JSON objects.
///
/// Fields are checked in declaration order, each at `path.<name>`, and every
/// failing field is reported rather than only the first.
///
/// - A missing required field is sanitized as `null`, so it fails with
///   whatever its sanitizer reports for `null` (e.g. `"string"`).
/// - An optional field that is missing or `null` is left out of the output.
/// - Unknown keys are passed through unchanged, unless the sanitizer is
///   [`strict`](Self::strict), in which case each one fails with `"absent"`.
///
/// The output is [`Fields`]: the sanitized fields in declaration order,
/// followed by any passed-through keys. Use [`map`](super::SanitizerExt::map)
/// or [`flat_map`](super::SanitizerExt::flat_map) to build a typed value from
/// it.
///
/// # Example
///
/// ```rust
/// use sanitizers::{integer, object, string, Sanitizer};
/// use serde_json::json;
///
/// let user = object()
///     .field("name", string())
///     .field("age", integer())
///     .optional("email", string())
///     .strict();
///
/// let result = user.sanitize(&json!({"name": "Alice", "age": 30}), "");
/// assert!(result.is_success());
///
/// let errors = user
///     .sanitize(&json!({"age": "thirty", "admin": true}), "")
///     .into_result()
///     .unwrap_err();
/// let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
/// assert_eq!(paths, vec!["name", "age", "admin"]);
/// ```
pub struct ObjectSanitizer {
    fields: IndexMap<String, FieldDef>,
    strict: bool,
    expected: String,
}

impl ObjectSanitizer {
    /// Creates an object sanitizer with no fields.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            strict: false,
            expected: "object".to_string(),
        }
    }

    /// Adds a required field.
    pub fn field<S>(self, name: impl Into<String>, sanitizer: S) -> Self
    where
        S: Sanitizer + 'static,
        S::Output: Into<Value>,
    {
        self.insert(name.into(), sanitizer, true)
    }

    /// Adds an optional field.
    ///
    /// When present and not `null`, the value must pass `sanitizer`.
    pub fn optional<S>(self, name: impl Into<String>, sanitizer: S) -> Self
    where
        S: Sanitizer + 'static,
        S::Output: Into<Value>,
    {
        self.insert(name.into(), sanitizer, false)
    }

    /// Rejects keys that are not declared as fields.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Overrides the expectation reported when the value is not an object.
    pub fn expecting(mut self, expected: impl Into<String>) -> Self {
        self.expected = expected.into();
        self
    }

    fn insert<S>(mut self, name: String, sanitizer: S, required: bool) -> Self
    where
        S: Sanitizer + 'static,
        S::Output: Into<Value>,
    {
        let sanitizer: FieldFn = Box::new(move |value: &Value, path: &str| {
            sanitizer.sanitize(value, path).map(Into::into)
        });
        self.fields.insert(
            name,
            FieldDef {
                sanitizer,
                required,
            },
        );
        self
    }

    fn sanitize_field(
        &self,
        name: &str,
        def: &FieldDef,
        input: &Map<String, Value>,
        path: &str,
    ) -> Option<SanitizeResult<(String, Value)>> {
        let field_value = match input.get(name) {
            None | Some(Value::Null) if !def.required => return None,
            Some(value) => value,
            None => &NULL,
        };

        let field_path = path::field(path, name);
        let sanitized = (def.sanitizer)(field_value, &field_path);
        Some(sanitized.map(|v| (name.to_string(), v)))
    }

    fn sanitize_extra(
        &self,
        key: &str,
        value: &Value,
        path: &str,
    ) -> SanitizeResult<(String, Value)> {
        if self.strict {
            result::fail(path::field(path, key), "absent")
        } else {
            result::ok((key.to_string(), value.clone()))
        }
    }
}

impl Default for ObjectSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer for ObjectSanitizer {
    type Output = Fields;

    fn sanitize(&self, value: &Value, path: &str) -> SanitizeResult<Fields> {
        let input = match value.as_object() {
            Some(input) => input,
            None => return result::fail(path, self.expected.as_str()),
        };

        let declared = self
            .fields
            .iter()
            .filter_map(|(name, def)| self.sanitize_field(name, def, input, path));
        let extra = input
            .iter()
            .filter(|(key, _)| !self.fields.contains_key(key.as_str()))
            .map(|(key, value)| self.sanitize_extra(key, value, path));

        let merged = result::merge(declared.chain(extra));

        #[cfg(feature = "tracing")]
        if let Some(entries) = result::entries(&merged) {
            tracing::debug!(path, errors = entries.len(), "object failed sanitization");
        }

        merged.map(|pairs| pairs.into_iter().collect())
    }
}
