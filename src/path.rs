//! Path helpers for locating values in nested input.
//!
//! Paths are plain strings: sanitizers never parse them, they only echo them
//! into [`ErrorEntry`](crate::ErrorEntry) records. Structural sanitizers use
//! these helpers to extend the caller's path when descending into a field or
//! an array element, producing locators like `users[0].email`.

/// The path of the root value.
pub const ROOT: &str = "";

/// Returns `path` extended with a field access.
///
/// At the root the field name stands alone; below it a `.` separates the
/// segments.
///
/// # Example
///
/// ```rust
/// use sanitizers::path;
///
/// assert_eq!(path::field("", "user"), "user");
/// assert_eq!(path::field("user", "email"), "user.email");
/// assert_eq!(path::field("users[0]", "email"), "users[0].email");
/// ```
pub fn field(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

/// Returns `path` extended with an array index.
///
/// # Example
///
/// ```rust
/// use sanitizers::path;
///
/// assert_eq!(path::index("", 0), "[0]");
/// assert_eq!(path::index("users", 3), "users[3]");
/// ```
pub fn index(path: &str, idx: usize) -> String {
    format!("{}[{}]", path, idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty() {
        assert_eq!(ROOT, "");
    }

    #[test]
    fn test_single_field() {
        assert_eq!(field(ROOT, "user"), "user");
    }

    #[test]
    fn test_single_index() {
        assert_eq!(index(ROOT, 0), "[0]");
    }

    #[test]
    fn test_nested_fields() {
        assert_eq!(field(&field(ROOT, "user"), "email"), "user.email");
    }

    #[test]
    fn test_deeply_nested() {
        let path = field(ROOT, "body");
        let path = field(&path, "data");
        let path = index(&path, 42);
        let path = field(&path, "items");
        let path = index(&path, 0);
        let path = field(&path, "name");
        assert_eq!(path, "body.data[42].items[0].name");
    }

    #[test]
    fn test_caller_path_is_opaque() {
        // Whatever the caller uses as a locator is kept verbatim.
        assert_eq!(field("query:", "page"), "query:.page");
        assert_eq!(index("$", 1), "$[1]");
    }
}
