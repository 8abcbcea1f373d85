//! Core flashcard library shared by the command-line application.
//!
//! Provides:
//! - The card model (`Card`, `Category`) with per-category answer checking
//! - A restricted arithmetic expression evaluator for math answers
//! - Answer normalization for vocabulary answers
//! - Session progress tracking

pub mod error;
pub mod expr;
pub mod matching;
pub mod progress;
pub mod types;

pub use error::{ExprError, Result};
pub use expr::evaluate;
pub use matching::{normalize, vocabulary_match};
pub use progress::ProgressTracker;
pub use types::{Card, Category};
