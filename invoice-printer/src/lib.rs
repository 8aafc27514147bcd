//! # invoice-printer
//!
//! Invoice output library.
//!
//! ## Scope
//!
//! This crate handles HOW an invoice is laid out:
//! - Fixed-width text building (display-width aware padding and wrapping)
//! - The printable text invoice
//! - Spreadsheet rows and their CSV / XLSX writers
//!
//! The numbers themselves (totals, amount in words, currency formatting) come
//! from `invoice-core`.
//!
//! ## Example
//!
//! ```ignore
//! use invoice_printer::{ExportFormat, InvoiceRenderer, export};
//! use shared::InvoiceData;
//!
//! let invoice = InvoiceData::sample();
//!
//! // Text layout for an 80-column page
//! let text = InvoiceRenderer::new(&invoice, 80).render()?;
//! println!("{}", text);
//!
//! // Spreadsheet next to it
//! let path = export(&invoice, ExportFormat::Xlsx, std::path::Path::new("."))?;
//! ```

mod error;
mod renderer;
mod sheet;
mod text;
mod width;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use renderer::{DEFAULT_WIDTH, InvoiceRenderer, MIN_WIDTH};
pub use sheet::{
    COLUMN_WIDTHS, ExportFormat, export, export_file_name, invoice_rows, write_csv, write_xlsx,
};
pub use text::TextBuilder;
pub use width::{display_width, pad_to_width, truncate_to_width, wrap_to_width};
