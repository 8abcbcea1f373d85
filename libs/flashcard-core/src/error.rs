//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using ExprError.
pub type Result<T> = std::result::Result<T, ExprError>;

/// Errors that can occur while evaluating an arithmetic expression.
#[derive(Debug, Error, PartialEq)]
pub enum ExprError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number literal: {text}")]
    InvalidNumber { text: String },

    #[error("unexpected token: {token}")]
    UnexpectedToken { token: String },

    #[error("trailing input after expression: {token}")]
    TrailingInput { token: String },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("division by zero")]
    DivisionByZero,
}
