//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionFn, digit_section, length_section, lowercase_section, special_section,
    uppercase_section,
};
use crate::types::EvaluationResult;

/// Sections in the order their feedback is reported.
const SECTIONS: [(&str, SectionFn); 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("special", special_section),
];

/// Delay before a live evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates password strength.
///
/// Never fails: any string, including the empty one, yields a result
/// with a score in `0..=6` and exactly five feedback lines.
pub fn evaluate(password: &SecretString) -> EvaluationResult {
    let mut score = 0;
    let mut feedback = Vec::with_capacity(SECTIONS.len());

    // Orchestrator: execute sections in sequence
    for (section_name, section_fn) in SECTIONS {
        let outcome = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!(section = section_name, points = outcome.points, "section evaluated");
        #[cfg(not(feature = "tracing"))]
        let _ = section_name;

        score += outcome.points;
        feedback.push(outcome.feedback);
    }

    let evaluation = EvaluationResult::new(score, feedback);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = evaluation.score,
        strength = %evaluation.strength,
        "password evaluated"
    );

    evaluation
}

/// Live evaluation: waits [`DEBOUNCE`], then sends the result via channel.
///
/// Nothing is sent if `token` is cancelled before the delay elapses,
/// which lets a newer keystroke supersede a pending evaluation.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::trace!("evaluation superseded before start");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate(&password);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
