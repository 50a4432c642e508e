//! Password strength checks
//!
//! Each check tests a single independent aspect of the password.

mod length;
mod variety;

pub use length::has_minimum_length;
pub use variety::{has_digit, has_lowercase, has_special_char, has_uppercase, SPECIAL_CHARS};
