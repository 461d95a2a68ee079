//! core::naming
//!
//! Qualified-name helpers shared by the loader and the engine.
//!
//! # Features
//!
//! - Join a parent's qualified name with a child's local name
//! - Extract the local name from a qualified name
//! - Validate module and member identifiers

/// Join a parent's qualified name and a child's local name.
///
/// # Example
///
/// ```
/// use flatdoc::core::naming::qualify;
///
/// assert_eq!(qualify("pkg.foo", "Bar"), "pkg.foo.Bar");
/// assert_eq!(qualify("", "Bar"), "Bar");
/// ```
pub fn qualify(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}.{child}")
    }
}

/// Return the last segment of a qualified name.
///
/// # Example
///
/// ```
/// use flatdoc::core::naming::local_name;
///
/// assert_eq!(local_name("pkg.foo.Bar"), "Bar");
/// assert_eq!(local_name("pkg"), "pkg");
/// ```
pub fn local_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Check whether `name` is a valid identifier.
///
/// Identifiers are non-empty, made of ASCII letters, digits and `_`, and
/// do not start with a digit.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Return the first segment of a qualified name that is not an identifier.
pub fn invalid_segment(qualified: &str) -> Option<&str> {
    qualified.split('.').find(|segment| !is_identifier(segment))
}
