//! Shared types for the invoice workspace
//!
//! Invoice data model, the sample record used when no invoice file is
//! supplied, and the unified error types used across crates.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{BankInfo, InvoiceData, InvoiceItem, LineItem, PartyInfo, Totals};
pub use serde::{Deserialize, Serialize};
