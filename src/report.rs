//! Plain-text rendering of an evaluation, as printed by the CLI.

use std::fmt::Write;

use crate::types::{EvaluationResult, Strength};

pub const HEADER: &str = "=== Password Strength Checker ===";
pub const INSTRUCTIONS: &str = "Enter a password to check its strength:";
pub const PROMPT: &str = "Password: ";

/// Closing line printed after the feedback list.
pub fn closing_remark(strength: Strength) -> &'static str {
    match strength {
        Strength::Weak => "Your password is weak. Please consider the feedback to improve it.",
        Strength::Moderate => {
            "Your password is moderately strong. Consider the feedback to make it stronger."
        }
        Strength::Strong => "Your password is strong. Good job!",
    }
}

/// Renders the results block shown after the prompt.
pub fn render(evaluation: &EvaluationResult) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n=== Results ===");
    let _ = writeln!(
        out,
        "Strength: {} ({}/{})",
        evaluation.strength, evaluation.score, evaluation.max_score
    );
    let _ = writeln!(out, "\nFeedback:");
    for item in &evaluation.feedback {
        let _ = writeln!(out, "- {}", item);
    }
    let _ = writeln!(out, "\n{}", closing_remark(evaluation.strength));

    out
}
