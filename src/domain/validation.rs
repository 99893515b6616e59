//! Input validators for free-text fields.
//!
//! Both functions are pure and total: no side effects, same input always
//! yields the same answer.

/// Validates a UI5 project name.
///
/// Accepts zero or more leading ASCII digits, then exactly one letter,
/// then any run of letters and digits. Rejects empty strings, digits-only
/// strings, and anything containing symbols or whitespace.
pub fn is_valid_project_name(name: &str) -> bool {
    let rest = name.trim_start_matches(|c: char| c.is_ascii_digit());
    let mut chars = rest.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Validates a UI5 namespace.
///
/// Accepts strings composed solely of letters, digits, underscore, and
/// dot. The empty string is valid.
pub fn is_valid_namespace(namespace: &str) -> bool {
    namespace.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
