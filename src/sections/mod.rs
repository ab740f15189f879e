//! Password evaluation sections
//!
//! Each section checks one aspect of the password and always
//! contributes exactly one feedback line.

mod length;
mod variety;

use secrecy::SecretString;

pub use length::length_section;
pub use variety::{
    SPECIAL_CHARACTERS, digit_section, lowercase_section, special_section, uppercase_section,
};

/// Result of running one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    pub points: u8,
    pub feedback: String,
}

impl SectionOutcome {
    pub fn new(points: u8, feedback: &str) -> Self {
        Self {
            points,
            feedback: feedback.to_string(),
        }
    }
}

/// Signature shared by every section.
pub type SectionFn = fn(&SecretString) -> SectionOutcome;
