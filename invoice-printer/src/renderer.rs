//! Text layout of a complete tax invoice

use crate::error::{PrintError, PrintResult};
use crate::text::TextBuilder;
use crate::width::wrap_to_width;
use invoice_core::{
    amount_in_words, compute_totals, format_amount, format_inr, format_number, format_rate,
    summary_total, tax_summary,
};
use shared::models::{InvoiceData, PartyInfo};
use tracing::instrument;

/// Default page width in characters
pub const DEFAULT_WIDTH: usize = 80;

/// Narrowest page the item and tax tables fit on
pub const MIN_WIDTH: usize = 76;

// Item table columns other than Description: (width, right aligned).
// AMOUNT holds up to 9,99,99,999.99; larger amounts widen their row.
const SL: (usize, bool) = (3, false);
const HSN: (usize, bool) = (8, false);
const GST: (usize, bool) = (5, true);
const QTY: (usize, bool) = (9, true);
const RATE: (usize, bool) = (10, true);
const PER: (usize, bool) = (4, false);
const AMOUNT: (usize, bool) = (14, true);

// Tax summary columns other than HSN/SAC
const TAXABLE: (usize, bool) = (14, true);
const HALF_RATE: (usize, bool) = (5, true);
const HALF_TAX: (usize, bool) = (12, true);
const TOTAL_TAX: (usize, bool) = (13, true);

/// Sum of fixed column widths plus one separator per gap
fn fixed_width(columns: &[(usize, bool)]) -> usize {
    columns.iter().map(|c| c.0).sum::<usize>() + columns.len()
}

pub struct InvoiceRenderer<'a> {
    invoice: &'a InvoiceData,
    width: usize,
}

impl<'a> InvoiceRenderer<'a> {
    pub fn new(invoice: &'a InvoiceData, width: usize) -> Self {
        Self { invoice, width }
    }

    /// Render the invoice as plain text
    ///
    /// # Errors
    ///
    /// - [`PrintError::InvalidConfig`] when the width is below [`MIN_WIDTH`]
    /// - [`PrintError::Words`] when the grand total cannot be written in words
    ///   (negative, or 10^13 and above)
    #[instrument(skip(self), fields(invoice = %self.invoice.invoice_number, width = self.width))]
    pub fn render(&self) -> PrintResult<String> {
        if self.width < MIN_WIDTH {
            return Err(PrintError::InvalidConfig(format!(
                "page width {} is below the minimum of {}",
                self.width, MIN_WIDTH
            )));
        }

        let inv = self.invoice;
        let totals = compute_totals(&inv.line_items());
        let words = amount_in_words(totals.grand_total)?;

        let mut b = TextBuilder::new(self.width);

        self.render_header(&mut b);
        self.render_parties(&mut b);
        self.render_items(&mut b);

        // ── Totals ──
        b.pair("Total", &format_inr(totals.subtotal));
        b.pair("Add: CGST", &format_inr(totals.cgst));
        b.pair("Add: SGST", &format_inr(totals.sgst));
        b.pair("Total Tax Amount", &format_inr(totals.total_tax));
        b.pair("Total Amount after Tax", &format_inr(totals.grand_total));
        b.eq_sep();

        self.render_tax_summary(&mut b);

        b.write_line("Amount Chargeable (in words)");
        b.wrapped(&format!("Indian Rupees {}", words), 2);
        b.dash_sep();

        if !inv.declaration.trim().is_empty() {
            b.write_line("Declaration");
            b.wrapped(&inv.declaration, 2);
            b.dash_sep();
        }

        self.render_bank(&mut b);

        b.text_right(&format!("for {}", inv.seller.name));
        b.newline();
        b.text_right("Authorised Signatory");

        tracing::debug!(grand_total = totals.grand_total, "Invoice rendered");
        Ok(b.finalize())
    }

    fn render_header(&self, b: &mut TextBuilder) {
        let inv = self.invoice;

        b.text_center("TAX INVOICE");
        b.eq_sep();
        b.pair(
            &format!("Invoice No.: {}", inv.invoice_number),
            &format!("Dated: {}", inv.date),
        );
        b.pair(
            &format!("Delivery Note: {}", inv.delivery_note),
            &format!("Mode/Terms of Payment: {}", inv.payment_terms),
        );
        let reference = if inv.reference_date.is_empty() {
            inv.reference_no.clone()
        } else {
            format!("{} dt. {}", inv.reference_no, inv.reference_date)
        };
        b.pair(
            &format!("Reference No. & Date: {}", reference),
            &format!("Other References: {}", inv.other_references),
        );
        b.pair(
            &format!("Buyer's Order No.: {}", inv.buyer_order_no),
            &format!("Dated: {}", inv.buyer_order_date),
        );
        b.pair(
            &format!("Dispatch Doc No.: {}", inv.dispatch_doc_no),
            &format!("Delivery Note Date: {}", inv.delivery_note_date),
        );
        b.pair(
            &format!("Dispatched through: {}", inv.dispatched_through),
            &format!("Destination: {}", inv.destination),
        );
        b.write_line(&format!("Terms of Delivery: {}", inv.terms_of_delivery));
        b.dash_sep();
    }

    fn render_parties(&self, b: &mut TextBuilder) {
        party_block(b, "CONSIGNEE (Ship to)", &self.invoice.seller);
        b.newline();
        party_block(b, "BUYER (Bill to)", &self.invoice.buyer);
        b.eq_sep();
    }

    fn render_items(&self, b: &mut TextBuilder) {
        let desc = (self.width - fixed_width(&[SL, HSN, GST, QTY, RATE, PER, AMOUNT]), false);
        let columns = [SL, desc, HSN, GST, QTY, RATE, PER, AMOUNT];

        b.row(
            &[
                "Sl", "Description", "HSN/SAC", "GST", "Quantity", "Rate", "per",
                "Amount",
            ],
            &columns,
        );
        b.dash_sep();

        for (i, item) in self.invoice.items.iter().enumerate() {
            let mut desc_lines = wrap_to_width(&item.description, desc.0).into_iter();
            let first = desc_lines.next().unwrap_or_default();

            b.row(
                &[
                    &(i + 1).to_string(),
                    &first,
                    &item.hsn,
                    &format_rate(item.gst_rate),
                    &format_number(item.quantity),
                    &format_amount(item.rate),
                    &item.unit,
                    &format_amount(item.amount),
                ],
                &columns,
            );
            // Continuation lines of a long description
            for line in desc_lines {
                b.row(&["", &line], &columns[..2]);
            }
        }
        b.dash_sep();
    }

    fn render_tax_summary(&self, b: &mut TextBuilder) {
        let hsn = (
            self.width - fixed_width(&[TAXABLE, HALF_RATE, HALF_TAX, HALF_RATE, HALF_TAX, TOTAL_TAX]),
            false,
        );
        let columns = [hsn, TAXABLE, HALF_RATE, HALF_TAX, HALF_RATE, HALF_TAX, TOTAL_TAX];

        let rows = tax_summary(&self.invoice.items);
        let total = summary_total(&rows);

        b.write_line("Tax Summary");
        b.row(
            &[
                "HSN/SAC", "Taxable Value", "CGST", "CGST Amt", "SGST", "SGST Amt", "Total Tax",
            ],
            &columns,
        );
        b.dash_sep();
        for row in &rows {
            b.row(
                &[
                    &row.hsn,
                    &format_amount(row.taxable_value),
                    &format_rate(row.cgst_rate),
                    &format_amount(row.cgst_amount),
                    &format_rate(row.sgst_rate),
                    &format_amount(row.sgst_amount),
                    &format_amount(row.total_tax),
                ],
                &columns,
            );
        }
        b.dash_sep();
        b.row(
            &[
                &total.hsn,
                &format_amount(total.taxable_value),
                "",
                &format_amount(total.cgst_amount),
                "",
                &format_amount(total.sgst_amount),
                &format_amount(total.total_tax),
            ],
            &columns,
        );
        b.eq_sep();
    }

    fn render_bank(&self, b: &mut TextBuilder) {
        let bank = &self.invoice.bank_details;

        b.write_line("Company's Bank Details");
        b.write_line(&format!("  A/c Holder's Name: {}", bank.account_name));
        b.write_line(&format!("  Bank Name: {}", bank.bank_name));
        b.write_line(&format!("  A/c No.: {}", bank.account_number));
        b.write_line(&format!("  Branch & IFS Code: {}", bank.ifsc_code));
        b.dash_sep();
    }
}

fn party_block(b: &mut TextBuilder, title: &str, party: &PartyInfo) {
    b.write_line(title);
    b.write_line(&format!("  {}", party.name));
    b.wrapped(&party.address, 2);
    b.write_line(&format!("  GSTIN/UIN: {}", party.gstin));
    b.write_line(&format!(
        "  State Name: {}, Code: {}",
        party.state_name, party.state_code
    ));
}
