//! Length check - tests password minimum length.

use secrecy::{ExposeSecret, SecretString};

/// Checks if the password meets the given minimum length.
///
/// Length is counted in characters, not bytes.
pub fn has_minimum_length(password: &SecretString, min_length: usize) -> bool {
    password.expose_secret().chars().count() >= min_length
}
