//! Integration tests for path construction through nested sanitizers.

use sanitizers::path::{self, ROOT};
use sanitizers::{array, integer, object, string, Sanitizer};
use serde_json::json;

#[test]
fn test_path_helpers_compose() {
    let p = path::field(&path::index(&path::field(ROOT, "users"), 2), "email");
    assert_eq!(p, "users[2].email");
}

#[test]
fn test_index_at_root() {
    assert_eq!(path::index(ROOT, 0), "[0]");
    assert_eq!(path::field(&path::index(ROOT, 1), "id"), "[1].id");
}

#[test]
fn test_paths_are_opaque() {
    // Whatever the caller passes is echoed back verbatim.
    for label in ["query", "headers.X-Token", "weird path/ with:chars", "[0]"] {
        let errors = string().sanitize(&json!(1), label).into_result().unwrap_err();
        assert_eq!(errors.first().path, label);
    }
}

#[test]
fn test_deeply_nested_paths() {
    let role = object().field("level", integer());
    let user = object().field("roles", array(role));
    let sanitizer = object().field("users", array(user));
    let input = json!({
        "users": [
            {"roles": [{"level": 1}]},
            {"roles": [{"level": 2}, {"level": "admin"}]}
        ]
    });

    let errors = sanitizer.sanitize(&input, "body").into_result().unwrap_err();
    assert_eq!(errors.first().path, "body.users[1].roles[1].level");
}
