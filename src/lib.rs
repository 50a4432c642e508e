//! Credential validation library
//!
//! This library provides independent, stateless validators for emails,
//! usernames and password strength, each a pure function from an input
//! string plus criteria to a boolean (or a numeric score).
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use credential_validators::{
//!     email_valid, password_strength, username_valid, StrengthCriteria, UsernameCriteria,
//! };
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("StrongP@ssw0rd".to_string().into());
//! let is_strong = password_strength(&password, 60.0, &StrengthCriteria::default())?;
//! assert!(is_strong);
//!
//! let criteria = UsernameCriteria {
//!     allow_underscore: true,
//!     ..Default::default()
//! };
//! assert!(username_valid("john_doe", &criteria));
//!
//! assert!(email_valid("user@example.com"));
//! # Ok::<(), credential_validators::ThresholdError>(())
//! ```

// Internal modules
mod checks;
mod criteria;
mod email;
mod evaluator;
mod username;

// Public API
pub use checks::{
    has_digit, has_lowercase, has_minimum_length, has_special_char, has_uppercase, SPECIAL_CHARS,
};
pub use criteria::{StrengthCriteria, UsernameCriteria};
pub use email::email_valid;
pub use evaluator::{password_strength, strength_score, ThresholdError, CHECK_POINTS};
pub use username::username_valid;
