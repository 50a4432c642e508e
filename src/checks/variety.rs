//! Character checks - uppercase, lowercase, digit and special character.

use secrecy::{ExposeSecret, SecretString};

/// The fixed set of characters counted as special by the strength
/// scorer. Not configurable, unlike the username validator's set.
pub const SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Checks if the password contains at least one uppercase letter.
pub fn has_uppercase(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_uppercase())
}

/// Checks if the password contains at least one lowercase letter.
pub fn has_lowercase(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_lowercase())
}

/// Checks if the password contains at least one digit.
pub fn has_digit(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// Checks if the password contains at least one character from
/// [`SPECIAL_CHARS`].
pub fn has_special_char(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_uppercase() {
        let pwd = SecretString::new("Password".to_string().into());
        assert!(has_uppercase(&pwd));

        let pwd = SecretString::new("password".to_string().into());
        assert!(!has_uppercase(&pwd));
    }

    #[test]
    fn test_has_lowercase() {
        let pwd = SecretString::new("PASSWORDx".to_string().into());
        assert!(has_lowercase(&pwd));

        let pwd = SecretString::new("PASSWORD".to_string().into());
        assert!(!has_lowercase(&pwd));
    }

    #[test]
    fn test_has_digit() {
        let pwd = SecretString::new("pass123".to_string().into());
        assert!(has_digit(&pwd));

        let pwd = SecretString::new("password".to_string().into());
        assert!(!has_digit(&pwd));
    }

    #[test]
    fn test_has_special_char() {
        let pwd = SecretString::new("pass@word".to_string().into());
        assert!(has_special_char(&pwd));

        let pwd = SecretString::new("password1".to_string().into());
        assert!(!has_special_char(&pwd));
    }

    #[test]
    fn test_special_char_set_is_fixed() {
        // Characters outside the fixed set do not count, even though
        // they are "special" in the everyday sense.
        let pwd = SecretString::new("pass~word".to_string().into());
        assert!(!has_special_char(&pwd));

        let pwd = SecretString::new("pass-word".to_string().into());
        assert!(!has_special_char(&pwd));
    }

    #[test]
    fn test_empty_password() {
        let pwd = SecretString::new("".to_string().into());
        assert!(!has_uppercase(&pwd));
        assert!(!has_lowercase(&pwd));
        assert!(!has_digit(&pwd));
        assert!(!has_special_char(&pwd));
    }
}
