//! # invoice-core
//!
//! Pure calculations behind a GST tax invoice:
//!
//! - [`compute_totals`]: subtotal, CGST/SGST split, total tax, grand total
//! - [`amount_in_words`]: "Amount Chargeable (in words)" using the Indian
//!   numbering scale (Thousand, Lakh, Crore, Arab, Kharab)
//! - [`format`]: Indian digit grouping for display (`₹12,34,567.89`)
//! - [`summary`]: per-HSN tax summary table
//!
//! All functions are stateless and safe to call from any thread.
//!
//! ## Example
//!
//! ```
//! use invoice_core::{amount_in_words, compute_totals};
//! use shared::LineItem;
//!
//! let totals = compute_totals(&[LineItem::new(27375.0, 5.0)]);
//! assert_eq!(totals.grand_total, 28743.75);
//! assert_eq!(
//!     amount_in_words(totals.grand_total).unwrap(),
//!     "Twenty Eight Thousand Seven Hundred Forty Three and Seventy Five Paise Only"
//! );
//! ```

mod error;
pub mod format;
pub mod money;
pub mod summary;
pub mod words;

// Re-exports
pub use error::WordsError;
pub use format::{format_amount, format_inr, format_number, format_plain, format_rate};
pub use money::compute_totals;
pub use summary::{HsnSummary, summary_total, tax_summary};
pub use words::amount_in_words;
