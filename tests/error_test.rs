//! Integration tests for error entries and result helpers.

use sanitizers::result::{self, fail, merge, ok};
use sanitizers::{integer, object, string, ErrorEntries, ErrorEntry, Sanitizer};
use serde_json::json;
use stillwater::prelude::*;
use stillwater::Validation;

#[test]
fn test_entry_fields() {
    let entry = ErrorEntry::new("user.email", "string");
    assert_eq!(entry.path, "user.email");
    assert_eq!(entry.expected, "string");
    assert!(!entry.is_root());
    assert!(ErrorEntry::new("", "object").is_root());
}

#[test]
fn test_entry_equality_is_structural() {
    let a = ErrorEntry::new("p", "string");
    let b = ErrorEntry::new("p".to_string(), "string".to_string());
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, ErrorEntry::new("p", "integer"));
    assert_ne!(a, ErrorEntry::new("q", "string"));
}

#[test]
fn test_entry_display() {
    assert_eq!(
        ErrorEntry::new("age", "integer").to_string(),
        "age: expected integer"
    );
    assert_eq!(
        ErrorEntry::new("", "object").to_string(),
        "(root): expected object"
    );
}

#[test]
fn test_entries_display_lists_each_entry() {
    let entries = ErrorEntries::single(ErrorEntry::new("a", "string"))
        .combine(ErrorEntries::single(ErrorEntry::new("b", "integer")));

    let display = entries.to_string();
    assert!(display.contains("2 error(s)"));
    assert!(display.contains("1. a: expected string"));
    assert!(display.contains("2. b: expected integer"));
}

#[test]
fn test_entries_to_json() {
    let errors = object()
        .field("id", integer())
        .field("name", string())
        .sanitize(&json!({"id": "1", "name": null}), "body")
        .into_result()
        .unwrap_err();

    assert_eq!(
        errors.to_json(),
        json!([
            {"path": "body.id", "expected": "integer"},
            {"path": "body.name", "expected": "string"}
        ])
    );
}

#[test]
fn test_empty_entry_list_is_rejected() {
    assert!(ErrorEntries::try_from_vec(Vec::new()).is_err());
    assert!(result::try_error::<()>(Vec::new()).is_err());

    let err = ErrorEntries::try_from(Vec::<ErrorEntry>::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "a failed result requires at least one error entry"
    );
}

#[test]
fn test_try_error_keeps_order() {
    let entries = vec![ErrorEntry::new("b", "x"), ErrorEntry::new("a", "y")];
    let result = result::try_error::<()>(entries.clone()).unwrap();
    assert_eq!(
        result::entries(&result).unwrap().clone().into_vec(),
        entries
    );
}

#[test]
fn test_at_path() {
    let errors = ErrorEntries::try_from_vec(vec![
        ErrorEntry::new("a", "string"),
        ErrorEntry::new("b", "integer"),
        ErrorEntry::new("a", "non-empty string"),
    ])
    .unwrap();

    assert_eq!(errors.at_path("a").len(), 2);
    assert_eq!(errors.at_path("b").len(), 1);
    assert!(errors.at_path("c").is_empty());
}

#[test]
fn test_result_equality() {
    assert_eq!(ok::<i32>(1), ok(1));
    assert_ne!(ok::<i32>(1), ok(2));
    assert_ne!(ok::<i32>(1), fail("", "integer"));
    assert_eq!(fail::<i32>("p", "x"), fail("p", "x"));
    assert_ne!(
        fail::<i32>("p", "x"),
        result::error(
            ErrorEntries::try_from_vec(vec![ErrorEntry::new("p", "x"), ErrorEntry::new("p", "x")])
                .unwrap()
        )
    );
}

#[test]
fn test_results_are_eq() {
    fn same<T: Eq>(a: &T, b: &T) -> bool {
        a == b
    }

    assert!(same(&fail::<String>("p", "x"), &fail("p", "x")));
    assert!(!same(&ok::<String>("a".into()), &fail("p", "x")));
    assert!(same(
        &ErrorEntries::single(ErrorEntry::new("p", "x")),
        &ErrorEntries::single(ErrorEntry::new("p", "x"))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_serialized_entries_match_to_json() {
    let errors = object()
        .field("id", integer())
        .field("tags", sanitizers::array(string()))
        .sanitize(&json!({"id": "1", "tags": ["a", 2]}), "")
        .into_result()
        .unwrap_err();

    assert_eq!(serde_json::to_value(&errors).unwrap(), errors.to_json());
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!([
            {"path": "id", "expected": "integer"},
            {"path": "tags[1]", "expected": "string"}
        ])
    );
}

#[test]
fn test_map_skips_failures() {
    assert_eq!(result::map(ok(2), |n| n * 10), ok(20));

    let mut called = false;
    let mapped = result::map(fail::<i32>("n", "integer"), |n| {
        called = true;
        n
    });
    assert!(!called);
    assert_eq!(mapped, fail("n", "integer"));
}

#[test]
fn test_merge_concatenates_in_order() {
    let tail = ErrorEntries::try_from_vec(vec![
        ErrorEntry::new("second", "b"),
        ErrorEntry::new("third", "c"),
    ])
    .unwrap();
    let merged = merge(vec![fail::<i32>("first", "a"), ok(1), result::error(tail)]);

    let paths: Vec<_> = result::entries(&merged)
        .unwrap()
        .iter()
        .map(|e| e.path.as_str())
        .collect();
    assert_eq!(paths, vec!["first", "second", "third"]);
}

#[test]
fn test_merge_all_success() {
    assert_eq!(
        merge(vec![ok(1), ok(2), ok(3)]),
        Validation::Success(vec![1, 2, 3])
    );
    assert_eq!(
        merge(Vec::<sanitizers::SanitizeResult<u8>>::new()),
        ok(Vec::new())
    );
}

#[test]
fn test_entries_iterate_by_value_and_reference() {
    let errors = ErrorEntries::try_from_vec(vec![
        ErrorEntry::new("a", "x"),
        ErrorEntry::new("b", "y"),
    ])
    .unwrap();

    let borrowed: Vec<&str> = (&errors).into_iter().map(|e| e.path.as_str()).collect();
    assert_eq!(borrowed, vec!["a", "b"]);

    let owned: Vec<ErrorEntry> = errors.into_iter().collect();
    assert_eq!(owned[1], ErrorEntry::new("b", "y"));
}

#[test]
fn test_entries_are_std_errors() {
    fn boxed(err: impl std::error::Error + 'static) -> Box<dyn std::error::Error> {
        Box::new(err)
    }

    let err = boxed(ErrorEntries::single(ErrorEntry::new("x", "string")));
    assert!(err.to_string().contains("x: expected string"));
}
