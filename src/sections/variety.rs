//! Character variety sections - uppercase, lowercase, digits, special chars.
//!
//! All classes are fixed ASCII sets. Non-ASCII letters and digits never count.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

/// The only characters accepted as "special".
///
/// `-`, `_`, `~`, `;` and other punctuation are deliberately absent.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

fn class_section(
    password: &SecretString,
    matches: fn(char) -> bool,
    present: &str,
    missing: &str,
) -> SectionOutcome {
    if password.expose_secret().chars().any(matches) {
        SectionOutcome::new(1, present)
    } else {
        SectionOutcome::new(0, missing)
    }
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Checks for at least one `A`-`Z`.
pub fn uppercase_section(password: &SecretString) -> SectionOutcome {
    class_section(
        password,
        |c| c.is_ascii_uppercase(),
        "Contains uppercase letters. ✓",
        "Add uppercase letters to strengthen your password.",
    )
}

/// Checks for at least one `a`-`z`.
pub fn lowercase_section(password: &SecretString) -> SectionOutcome {
    class_section(
        password,
        |c| c.is_ascii_lowercase(),
        "Contains lowercase letters. ✓",
        "Add lowercase letters to strengthen your password.",
    )
}

/// Checks for at least one `0`-`9`.
pub fn digit_section(password: &SecretString) -> SectionOutcome {
    class_section(
        password,
        |c| c.is_ascii_digit(),
        "Contains numbers. ✓",
        "Add numbers to strengthen your password.",
    )
}

/// Checks for at least one character from [`SPECIAL_CHARACTERS`].
pub fn special_section(password: &SecretString) -> SectionOutcome {
    class_section(
        password,
        is_special,
        "Contains special characters. ✓",
        "Add special characters like !@#$% to strengthen your password.",
    )
}
