//! Length section - scores the password by character count.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

const MIN_LENGTH: usize = 8;
const GOOD_LENGTH: usize = 12;

/// Scores the password length.
///
/// # Returns
/// - 0 points below `MIN_LENGTH`
/// - 1 point from `MIN_LENGTH` up to `GOOD_LENGTH - 1`
/// - 2 points from `GOOD_LENGTH` on
pub fn length_section(password: &SecretString) -> SectionOutcome {
    // Characters, not bytes: "ääääääää" is 8 long.
    let len = password.expose_secret().chars().count();

    if len < MIN_LENGTH {
        SectionOutcome::new(0, "Password is too short. Use at least 8 characters.")
    } else if len >= GOOD_LENGTH {
        SectionOutcome::new(2, "Good password length!")
    } else {
        SectionOutcome::new(1, "Password length is acceptable, but could be longer.")
    }
}
