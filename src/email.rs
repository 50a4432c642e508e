//! Email format validation - fixed pattern primitive.

use once_cell::sync::Lazy;
use regex::Regex;

// Local part is either dot-separated atoms or a quoted string; the
// domain is dot-separated labels with a final label of length >= 2.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)^(([^<>()\[\]\.,;:\s@"]+(\.[^<>()\[\]\.,;:\s@"]+)*)|(".+"))@(([^<>()\[\]\.,;:\s@"]+\.)+[^<>()\[\]\.,;:\s@"]{2,})$"#,
    )
    .expect("Failed to compile email pattern")
});

/// Validates an email address against the fixed pattern.
///
/// Case-insensitive, matched over the full string. Not configurable.
///
/// # Example
/// ```rust
/// use credential_validators::email_valid;
///
/// assert!(email_valid("user@example.com"));
/// assert!(!email_valid("not-an-email"));
/// ```
pub fn email_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
