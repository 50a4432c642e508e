//! Password strength evaluator - scoring and threshold comparison.

use secrecy::SecretString;
use thiserror::Error;

use crate::checks::{has_digit, has_lowercase, has_minimum_length, has_special_char, has_uppercase};
use crate::criteria::StrengthCriteria;

/// Points contributed by each satisfied check.
pub const CHECK_POINTS: u8 = 20;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ThresholdError {
    #[error("minimum strength must be a finite number between 0 and 100, got {0}")]
    OutOfRange(f64),
}

/// Computes the strength score of a password, in [0, 100].
///
/// The length check always contributes; the other four checks
/// contribute only when their `require_*` flag is set. Disabling a
/// flag removes a point source without redistributing its points, so
/// the maximum remains 100.
///
/// # Arguments
/// * `password` - The password to score
/// * `criteria` - The scoring criteria
///
/// # Returns
/// The accumulated score: 20 points per satisfied check.
pub fn strength_score(password: &SecretString, criteria: &StrengthCriteria) -> u8 {
    let mut score = 0;

    if has_minimum_length(password, criteria.min_length) {
        score += CHECK_POINTS;
    }

    // Gated checks, each independent of the others
    let gated: [(bool, fn(&SecretString) -> bool); 4] = [
        (criteria.require_uppercase, has_uppercase),
        (criteria.require_lowercase, has_lowercase),
        (criteria.require_number, has_digit),
        (criteria.require_special_char, has_special_char),
    ];

    for (required, check) in gated {
        if required && check(password) {
            score += CHECK_POINTS;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("password strength score: {}", score);

    score
}

/// Checks whether a password's strength score reaches `min_strength`.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `min_strength` - Required score, a finite number in [0, 100]
/// * `criteria` - The scoring criteria
///
/// # Errors
/// Returns [`ThresholdError::OutOfRange`] if `min_strength` is NaN,
/// infinite, or outside [0, 100]. The check happens before any
/// evaluation of the password.
pub fn password_strength(
    password: &SecretString,
    min_strength: f64,
    criteria: &StrengthCriteria,
) -> Result<bool, ThresholdError> {
    if !min_strength.is_finite() || !(0.0..=100.0).contains(&min_strength) {
        return Err(ThresholdError::OutOfRange(min_strength));
    }

    Ok(f64::from(strength_score(password, criteria)) >= min_strength)
}
