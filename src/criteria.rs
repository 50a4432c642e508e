//! Validation criteria - configuration records consumed once per call.

/// Criteria for password strength scoring.
///
/// Each `require_*` flag gates one 20-point check; the length check is
/// always active. Missing fields take the documented defaults via
/// `Default` and struct update syntax:
///
/// ```rust
/// use credential_validators::StrengthCriteria;
///
/// let criteria = StrengthCriteria {
///     min_length: 12,
///     ..Default::default()
/// };
/// assert!(criteria.require_uppercase);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthCriteria {
    /// Minimum required length (default 8).
    pub min_length: usize,
    /// Whether an uppercase letter is required (default true).
    pub require_uppercase: bool,
    /// Whether a lowercase letter is required (default true).
    pub require_lowercase: bool,
    /// Whether a digit is required (default true).
    pub require_number: bool,
    /// Whether a special character is required (default true).
    pub require_special_char: bool,
}

impl Default for StrengthCriteria {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_number: true,
            require_special_char: true,
        }
    }
}

impl StrengthCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub fn with_require_uppercase(mut self, required: bool) -> Self {
        self.require_uppercase = required;
        self
    }

    #[must_use]
    pub fn with_require_lowercase(mut self, required: bool) -> Self {
        self.require_lowercase = required;
        self
    }

    #[must_use]
    pub fn with_require_number(mut self, required: bool) -> Self {
        self.require_number = required;
        self
    }

    #[must_use]
    pub fn with_require_special_char(mut self, required: bool) -> Self {
        self.require_special_char = required;
        self
    }
}

/// Criteria for username format validation.
///
/// Lowercase letters are always allowed; every other character class is
/// opt-in. `allowed_special_chars` narrows the special-character class
/// to an explicit set; when empty with `allow_special_chars` set, any
/// non-word character is admitted instead.
///
/// A `min_length` greater than `max_length` is accepted configuration:
/// the length gate can then never pass, so every username is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameCriteria {
    /// Minimum required length, inclusive (default 3).
    pub min_length: usize,
    /// Maximum allowed length, inclusive (default 20).
    pub max_length: usize,
    /// Whether uppercase letters are allowed (default false).
    pub allow_uppercase: bool,
    /// Whether digits are allowed (default true).
    pub allow_numbers: bool,
    /// Whether special characters are allowed (default false).
    pub allow_special_chars: bool,
    /// Explicit set of allowed special characters (default empty).
    pub allowed_special_chars: String,
    /// Whether underscores are allowed (default false).
    pub allow_underscore: bool,
    /// Whether dots are allowed (default false).
    pub allow_dots: bool,
}

impl Default for UsernameCriteria {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 20,
            allow_uppercase: false,
            allow_numbers: true,
            allow_special_chars: false,
            allowed_special_chars: String::new(),
            allow_underscore: false,
            allow_dots: false,
        }
    }
}

impl UsernameCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub fn with_allow_uppercase(mut self, allowed: bool) -> Self {
        self.allow_uppercase = allowed;
        self
    }

    #[must_use]
    pub fn with_allow_numbers(mut self, allowed: bool) -> Self {
        self.allow_numbers = allowed;
        self
    }

    #[must_use]
    pub fn with_allow_special_chars(mut self, allowed: bool) -> Self {
        self.allow_special_chars = allowed;
        self
    }

    #[must_use]
    pub fn with_allowed_special_chars(mut self, chars: impl Into<String>) -> Self {
        self.allowed_special_chars = chars.into();
        self
    }

    #[must_use]
    pub fn with_allow_underscore(mut self, allowed: bool) -> Self {
        self.allow_underscore = allowed;
        self
    }

    #[must_use]
    pub fn with_allow_dots(mut self, allowed: bool) -> Self {
        self.allow_dots = allowed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_criteria_defaults() {
        let criteria = StrengthCriteria::default();
        assert_eq!(criteria.min_length, 8);
        assert!(criteria.require_uppercase);
        assert!(criteria.require_lowercase);
        assert!(criteria.require_number);
        assert!(criteria.require_special_char);
    }

    #[test]
    fn test_strength_criteria_builder() {
        let criteria = StrengthCriteria::new()
            .with_min_length(12)
            .with_require_special_char(false);
        assert_eq!(criteria.min_length, 12);
        assert!(!criteria.require_special_char);
        assert!(criteria.require_uppercase);
    }

    #[test]
    fn test_username_criteria_defaults() {
        let criteria = UsernameCriteria::default();
        assert_eq!(criteria.min_length, 3);
        assert_eq!(criteria.max_length, 20);
        assert!(!criteria.allow_uppercase);
        assert!(criteria.allow_numbers);
        assert!(!criteria.allow_special_chars);
        assert!(criteria.allowed_special_chars.is_empty());
        assert!(!criteria.allow_underscore);
        assert!(!criteria.allow_dots);
    }

    #[test]
    fn test_username_criteria_builder() {
        let criteria = UsernameCriteria::new()
            .with_allow_uppercase(true)
            .with_allowed_special_chars("!@#")
            .with_allow_special_chars(true);
        assert!(criteria.allow_uppercase);
        assert!(criteria.allow_special_chars);
        assert_eq!(criteria.allowed_special_chars, "!@#");
    }
}
