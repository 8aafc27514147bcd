//! Subcommand implementations
//!
//! Each command returns the text it would print so `main` owns stdout.

use anyhow::{Context, Result};
use invoice_core::{amount_in_words, compute_totals, format_inr};
use invoice_printer::{ExportFormat, InvoiceRenderer, TextBuilder, export};
use shared::{AppError, InvoiceData};
use std::path::{Path, PathBuf};

/// Width of the `totals` listing
const TOTALS_WIDTH: usize = 40;

/// Load an invoice from a JSON file, or the sample invoice when no file is given
pub fn load_invoice(file: Option<&Path>) -> Result<InvoiceData> {
    let Some(path) = file else {
        tracing::debug!("No invoice file given, using sample invoice");
        return Ok(InvoiceData::sample());
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            AppError::not_found(e.to_string()).with_detail("path", path.display().to_string())
        })
        .with_context(|| format!("Failed to read invoice file {}", path.display()))?;
    let invoice: InvoiceData = serde_json::from_str(&content)
        .map_err(|e| AppError::invalid_format(e.to_string()))
        .with_context(|| format!("Invalid invoice JSON in {}", path.display()))?;

    tracing::info!(
        invoice = %invoice.invoice_number,
        items = invoice.items.len(),
        "Invoice loaded"
    );
    Ok(invoice)
}

pub fn words(amount: f64) -> Result<String> {
    amount_in_words(amount)
        .map_err(AppError::from)
        .with_context(|| format!("Cannot write {} in words", amount))
}

pub fn totals(invoice: &InvoiceData, json: bool) -> Result<String> {
    let totals = compute_totals(&invoice.line_items());

    if json {
        return serde_json::to_string_pretty(&totals).context("Failed to serialize totals");
    }

    let mut b = TextBuilder::new(TOTALS_WIDTH);
    b.pair("Subtotal", &format_inr(totals.subtotal))
        .pair("CGST", &format_inr(totals.cgst))
        .pair("SGST", &format_inr(totals.sgst))
        .pair("Total Tax", &format_inr(totals.total_tax))
        .pair("Grand Total", &format_inr(totals.grand_total));
    Ok(b.finalize())
}

pub fn render(invoice: &InvoiceData, width: usize) -> Result<String> {
    InvoiceRenderer::new(invoice, width)
        .render()
        .map_err(AppError::from)
        .with_context(|| format!("Failed to render invoice {}", invoice.invoice_number))
}

pub fn export_to(invoice: &InvoiceData, format: ExportFormat, dir: &Path) -> Result<PathBuf> {
    export(invoice, format, dir).map_err(AppError::from).with_context(|| {
        format!(
            "Failed to export invoice {} to {}",
            invoice.invoice_number,
            dir.display()
        )
    })
}

pub fn sample() -> Result<String> {
    serde_json::to_string_pretty(&InvoiceData::sample()).context("Failed to serialize sample")
}
