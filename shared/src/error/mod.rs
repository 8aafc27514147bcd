//! Unified error system for the invoice workspace
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Invoice data errors
//! - 2xxx: Export errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::AmountTooLarge);
//! assert_eq!(err.code.code(), 1004);
//!
//! let err = AppError::not_found("invoice.json").with_detail("path", "invoice.json");
//! assert_eq!(err.code, ErrorCode::NotFound);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
