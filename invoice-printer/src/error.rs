//! Error types for the printer library

use invoice_core::WordsError;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// XLSX writer error
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Invalid layout configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Grand total could not be expressed in words
    #[error("Amount in words: {0}")]
    Words(#[from] WordsError),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;

impl From<PrintError> for AppError {
    fn from(err: PrintError) -> Self {
        match err {
            PrintError::Words(e) => e.into(),
            PrintError::InvalidConfig(msg) => AppError::invalid_layout(msg),
            PrintError::Io(_) | PrintError::Csv(_) | PrintError::Xlsx(_) => {
                AppError::with_message(ErrorCode::FileWriteFailed, err.to_string())
            }
        }
    }
}
