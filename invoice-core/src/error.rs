//! Error types for amount conversion

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Amount-in-words error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WordsError {
    /// Negative, NaN or infinite amount
    #[error("Amount must be a non-negative finite number, got {0}")]
    InvalidArgument(f64),

    /// Integer part has no scale word (>= 10^13)
    #[error("Amount {0} is beyond the Kharab scale")]
    OutOfRange(f64),
}

impl From<WordsError> for AppError {
    fn from(err: WordsError) -> Self {
        let (code, amount) = match &err {
            WordsError::InvalidArgument(v) => (ErrorCode::InvalidAmount, *v),
            WordsError::OutOfRange(v) => (ErrorCode::AmountTooLarge, *v),
        };
        // NaN/Infinity serialize as null
        AppError::with_message(code, err.to_string()).with_detail("amount", amount)
    }
}
