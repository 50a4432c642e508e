//! Username format validation - dynamic character-class pattern.

use regex::Regex;

use crate::criteria::UsernameCriteria;

/// Builds the anchored character-class pattern for the given criteria.
///
/// Lowercase letters are always in the class; every other fragment is
/// appended behind its flag, in a fixed order. Caller-supplied special
/// characters are escaped before insertion so they can never alter the
/// class structure.
fn class_pattern(criteria: &UsernameCriteria) -> String {
    let mut pattern = String::from("^[a-z");

    if criteria.allow_uppercase {
        pattern.push_str("A-Z");
    }

    if criteria.allow_numbers {
        pattern.push_str("0-9");
    }

    if criteria.allow_special_chars {
        if criteria.allowed_special_chars.is_empty() {
            // No explicit set given: admit any non-word character
            pattern.push_str(r"\W");
        } else {
            pattern.push_str(&regex::escape(&criteria.allowed_special_chars));
        }
    }

    if criteria.allow_underscore {
        pattern.push('_');
    }

    if criteria.allow_dots {
        pattern.push_str(r"\.");
    }

    pattern.push_str("]+$");
    pattern
}

/// Validates a username against the given criteria.
///
/// Two gates, both of which must pass:
/// - length within `[min_length, max_length]`, inclusive (counted in
///   characters; `min_length > max_length` simply never passes)
/// - every character drawn from the allowed class, end to end
///
/// # Example
/// ```rust
/// use credential_validators::{username_valid, UsernameCriteria};
///
/// assert!(username_valid("johndoe", &UsernameCriteria::default()));
/// assert!(!username_valid("john_doe", &UsernameCriteria::default()));
/// ```
pub fn username_valid(username: &str, criteria: &UsernameCriteria) -> bool {
    let pattern = class_pattern(criteria);

    #[cfg(feature = "tracing")]
    tracing::debug!("username pattern: {}", pattern);

    // Escaping keeps the class well-formed for any criteria
    let re = Regex::new(&pattern).expect("Failed to compile username pattern");

    let length = username.chars().count();
    let length_valid = length >= criteria.min_length && length <= criteria.max_length;

    length_valid && re.is_match(username)
}
