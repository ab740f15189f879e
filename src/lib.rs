//! Password strength checker library
//!
//! Scores a password against five fixed checks (length, uppercase,
//! lowercase, digit, special character) and returns a score out of 6,
//! a strength category and one feedback line per check.
//!
//! # Features
//!
//! - `async` (default): Enables debounced live evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the interactive `pwd-checker` binary
//!
//! # Example
//!
//! ```rust
//! use pwd_checker::{evaluate, Strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefgh1!".to_string().into());
//! let evaluation = evaluate(&password);
//!
//! assert_eq!(evaluation.score, 5);
//! assert_eq!(evaluation.strength, Strength::Strong);
//! for line in &evaluation.feedback {
//!     println!("- {line}");
//! }
//! ```

// Internal modules
mod evaluator;
mod sections;
mod types;

pub mod report;

#[cfg(feature = "cli")]
pub mod cli;

// Public API
pub use evaluator::evaluate;
pub use sections::SPECIAL_CHARACTERS;
pub use types::{EvaluationResult, MAX_SCORE, Strength};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_tx};
