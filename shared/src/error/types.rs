//! Application error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (offending values, file paths, ...)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create an invalid layout error
    pub fn invalid_layout(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidLayout, msg)
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, msg)
    }

    /// Create an invalid format error
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, msg)
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new_uses_default_message() {
        let err = AppError::new(ErrorCode::AmountTooLarge);
        assert_eq!(err.code, ErrorCode::AmountTooLarge);
        assert_eq!(err.message, "Amount is too large to express in words");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::with_message(ErrorCode::InvalidAmount, "amount must be non-negative")
            .with_detail("amount", -12.5)
            .with_detail("field", "grandTotal");

        assert_eq!(err.code, ErrorCode::InvalidAmount);
        let details = err.details.unwrap();
        assert_eq!(details.get("amount").unwrap(), -12.5);
        assert_eq!(details.get("field").unwrap(), "grandTotal");
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        assert_eq!(AppError::invalid_layout("x").code, ErrorCode::InvalidLayout);
        assert_eq!(AppError::not_found("x").code, ErrorCode::NotFound);
        assert_eq!(AppError::invalid_format("x").code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::FileWriteFailed, "disk full");
        assert_eq!(format!("{}", err), "disk full");
    }
}
