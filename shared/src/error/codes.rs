//! Unified error codes for the invoice workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Invoice data errors
//! - 2xxx: Export errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize as plain
/// numbers in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Resource not found
    NotFound = 3,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 1xxx: Invoice ====================
    /// Amount is negative or not a finite number
    InvalidAmount = 1002,
    /// Amount exceeds the largest supported scale word
    AmountTooLarge = 1004,

    // ==================== 2xxx: Export ====================
    /// Output file could not be written
    FileWriteFailed = 2002,
    /// Layout configuration is invalid (e.g. paper too narrow)
    InvalidLayout = 2003,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidFormat => "Invalid format",

            // Invoice
            ErrorCode::InvalidAmount => "Invalid amount",
            ErrorCode::AmountTooLarge => "Amount is too large to express in words",

            // Export
            ErrorCode::FileWriteFailed => "Failed to write output file",
            ErrorCode::InvalidLayout => "Invalid layout configuration",

            // System
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            1 => Ok(ErrorCode::Unknown),
            3 => Ok(ErrorCode::NotFound),
            6 => Ok(ErrorCode::InvalidFormat),

            // Invoice
            1002 => Ok(ErrorCode::InvalidAmount),
            1004 => Ok(ErrorCode::AmountTooLarge),

            // Export
            2002 => Ok(ErrorCode::FileWriteFailed),
            2003 => Ok(ErrorCode::InvalidLayout),

            // System
            9002 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
