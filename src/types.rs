//! Evaluation result types.

use std::fmt;

/// Highest score a password can reach: 2 for length, 1 for each character class.
pub const MAX_SCORE: u8 = 6;

/// Strength category derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Maps a score onto its category.
    ///
    /// - `5..` => `Strong`
    /// - `3..=4` => `Moderate`
    /// - `..=2` => `Weak`
    pub fn from_score(score: u8) -> Self {
        match score {
            5.. => Strength::Strong,
            3..=4 => Strength::Moderate,
            _ => Strength::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single evaluation.
///
/// `feedback` holds one line per check, always in the order
/// length, uppercase, lowercase, digit, special.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub score: u8,
    pub max_score: u8,
    pub strength: Strength,
    pub feedback: Vec<String>,
}

impl EvaluationResult {
    pub(crate) fn new(score: u8, feedback: Vec<String>) -> Self {
        Self {
            score,
            max_score: MAX_SCORE,
            strength: Strength::from_score(score),
            feedback,
        }
    }
}
