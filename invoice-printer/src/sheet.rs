//! Spreadsheet export (CSV / XLSX)
//!
//! Both formats share one row layout built by [`invoice_rows`]: a single
//! sheet that mirrors the printed invoice top to bottom.

use crate::error::PrintResult;
use invoice_core::{amount_in_words, compute_totals, format_number, format_plain, format_rate};
use rust_xlsxwriter::{Format, Workbook};
use shared::models::InvoiceData;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Worksheet name in the XLSX file
const SHEET_NAME: &str = "Invoice";

/// XLSX column widths, Sl through Amount
pub const COLUMN_WIDTHS: [f64; 8] = [5.0, 25.0, 10.0, 8.0, 10.0, 10.0, 5.0, 12.0];

/// First cells that mark a heading row (bold in XLSX)
const HEADINGS: &[&str] = &[
    "TAX INVOICE",
    "CONSIGNEE (Ship to)",
    "Sl",
    "Amount Chargeable (in words)",
    "Declaration",
    "Company's Bank Details",
];

/// Spreadsheet file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Output file name: `invoice-<number>.<ext>` with `/` replaced by `-`
pub fn export_file_name(invoice: &InvoiceData, extension: &str) -> String {
    format!(
        "invoice-{}.{}",
        invoice.invoice_number.replace('/', "-"),
        extension
    )
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Amount under the Amount column, label under Rate
fn total_row(label: &str, amount: f64) -> Vec<String> {
    row(&["", "", "", "", "", label, "", &format_plain(amount)])
}

fn blank() -> Vec<String> {
    row(&[""])
}

/// Build the sheet rows for an invoice
///
/// # Errors
///
/// [`PrintError::Words`](crate::PrintError::Words) when the grand total
/// cannot be written in words.
pub fn invoice_rows(invoice: &InvoiceData) -> PrintResult<Vec<Vec<String>>> {
    let inv = invoice;
    let totals = compute_totals(&inv.line_items());
    let words = amount_in_words(totals.grand_total)?;

    let reference = if inv.reference_date.is_empty() {
        inv.reference_no.clone()
    } else {
        format!("{} dt. {}", inv.reference_no, inv.reference_date)
    };

    let mut rows = vec![
        row(&["TAX INVOICE"]),
        blank(),
        row(&["Invoice Number", &inv.invoice_number, "", "Dated", &inv.date]),
        blank(),
        row(&["Delivery Note", &inv.delivery_note, "", "Mode/Terms of Payment", &inv.payment_terms]),
        row(&["Reference No. & Date.", &reference, "", "Other References", &inv.other_references]),
        row(&["Buyer's Order No.", &inv.buyer_order_no, "", "Dated", &inv.buyer_order_date]),
        row(&["Dispatch Doc No.", &inv.dispatch_doc_no, "", "Delivery Note Date", &inv.delivery_note_date]),
        row(&["Dispatched through", &inv.dispatched_through, "", "Destination", &inv.destination]),
        row(&["Terms of Delivery", &inv.terms_of_delivery]),
        blank(),
        row(&["CONSIGNEE (Ship to)", "", "", "BUYER (Bill to)"]),
        row(&[&inv.seller.name, "", "", &inv.buyer.name]),
        row(&[&inv.seller.address, "", "", &inv.buyer.address]),
        row(&[
            &format!("GSTIN/UIN: {}", inv.seller.gstin),
            "",
            "",
            &format!("GSTIN/UIN: {}", inv.buyer.gstin),
        ]),
        row(&[
            &format!("State Name: {}, Code: {}", inv.seller.state_name, inv.seller.state_code),
            "",
            "",
            &format!("State Name: {}, Code: {}", inv.buyer.state_name, inv.buyer.state_code),
        ]),
        blank(),
        row(&["Sl", "Description of Goods", "HSN/SAC", "GST Rate", "Quantity", "Rate", "per", "Amount"]),
        row(&["No.", "", "", "", "", "", "", ""]),
    ];

    for (i, item) in inv.items.iter().enumerate() {
        rows.push(row(&[
            &(i + 1).to_string(),
            &item.description,
            &item.hsn,
            &format_rate(item.gst_rate),
            &format_number(item.quantity),
            &format_plain(item.rate),
            &item.unit,
            &format_plain(item.amount),
        ]));
    }

    rows.extend([
        blank(),
        total_row("Total", totals.subtotal),
        blank(),
        total_row("Add: CGST", totals.cgst),
        total_row("Add: SGST", totals.sgst),
        blank(),
        total_row("Total Tax Amount", totals.total_tax),
        total_row("Total Amount after Tax", totals.grand_total),
        blank(),
        row(&["Amount Chargeable (in words)"]),
        row(&[&format!("Indian Rupees {}", words)]),
        blank(),
        row(&["Declaration"]),
        row(&[&inv.declaration]),
        blank(),
        row(&["Company's Bank Details"]),
        row(&[&format!("A/c Holder's Name: {}", inv.bank_details.account_name)]),
        row(&[&format!("Bank Name: {}", inv.bank_details.bank_name)]),
        row(&[&format!("A/c No.: {}", inv.bank_details.account_number)]),
        row(&[&format!("Branch & IFS Code: {}", inv.bank_details.ifsc_code)]),
        blank(),
        row(&[&format!("for {}", inv.seller.name)]),
        blank(),
        blank(),
        row(&["Authorised Signatory"]),
    ]);

    Ok(rows)
}

/// Write rows as comma-separated values
#[instrument(skip(rows), fields(rows = rows.len()))]
pub fn write_csv(rows: &[Vec<String>], path: &Path) -> PrintResult<()> {
    // Rows have different field counts
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    for record in rows {
        writer.write_record(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write rows to a single-sheet XLSX workbook
#[instrument(skip(rows), fields(rows = rows.len()))]
pub fn write_xlsx(rows: &[Vec<String>], path: &Path) -> PrintResult<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet().set_name(SHEET_NAME)?;
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    for (r, record) in rows.iter().enumerate() {
        let heading = record
            .first()
            .is_some_and(|first| HEADINGS.contains(&first.as_str()));

        for (c, cell) in record.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            if heading {
                worksheet.write_string_with_format(r as u32, c as u16, cell, &bold)?;
            } else {
                worksheet.write_string(r as u32, c as u16, cell)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Write the invoice into `dir` and return the file path
#[instrument(skip(invoice, dir), fields(invoice = %invoice.invoice_number))]
pub fn export(invoice: &InvoiceData, format: ExportFormat, dir: &Path) -> PrintResult<PathBuf> {
    let path = dir.join(export_file_name(invoice, format.extension()));
    let rows = invoice_rows(invoice)?;

    match format {
        ExportFormat::Csv => write_csv(&rows, &path)?,
        ExportFormat::Xlsx => write_xlsx(&rows, &path)?,
    }

    tracing::info!(path = %path.display(), "Invoice exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrintError;

    #[test]
    fn test_export_file_name() {
        let invoice = InvoiceData::sample();
        assert_eq!(export_file_name(&invoice, "csv"), "invoice-020-25-26.csv");
        assert_eq!(export_file_name(&invoice, "xlsx"), "invoice-020-25-26.xlsx");
    }

    #[test]
    fn test_rows_layout() {
        let rows = invoice_rows(&InvoiceData::sample()).unwrap();

        assert_eq!(rows[0], vec!["TAX INVOICE"]);
        assert_eq!(rows[2], vec!["Invoice Number", "020/25-26", "", "Dated", "24-Apr-25"]);
        assert_eq!(rows[5][1], "REF-2025-ABC dt. 20-Apr-25");
        assert!(rows.contains(&row(&[
            "1", "Metal Mix", "251710", "5%", "912.5", "30.00", "CFT", "27375.00"
        ])));
        assert!(rows.contains(&total_row("Add: CGST", 684.375)));
        assert!(rows.contains(&row(&["", "", "", "", "", "Total Amount after Tax", "", "28743.75"])));
        assert!(rows.contains(&row(&[
            "Indian Rupees Twenty Eight Thousand Seven Hundred Forty Three and Seventy Five Paise Only"
        ])));
        assert_eq!(rows.last().unwrap(), &vec!["Authorised Signatory"]);
    }

    #[test]
    fn test_cgst_cell_is_rounded() {
        let rows = invoice_rows(&InvoiceData::sample()).unwrap();
        let cgst = rows.iter().find(|r| r.get(5).is_some_and(|c| c == "Add: CGST")).unwrap();
        assert_eq!(cgst[7], "684.38");
    }

    #[test]
    fn test_rows_reject_negative_total() {
        let mut invoice = InvoiceData::sample();
        invoice.items[0].amount = -1.0;
        assert!(matches!(invoice_rows(&invoice), Err(PrintError::Words(_))));
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = invoice_rows(&InvoiceData::sample()).unwrap();

        write_csv(&rows, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("TAX INVOICE\n"));
        assert!(content.contains("Invoice Number,020/25-26,,Dated,24-Apr-25\n"));
        assert!(content.contains("1,Metal Mix,251710,5%,912.5,30.00,CFT,27375.00\n"));
        assert!(content.contains(",,,,,Total Amount after Tax,,28743.75\n"));
        // Address contains commas and is quoted
        assert!(content.contains("\"Shop No 4, Niharika Complex"));
    }

    #[test]
    fn test_write_xlsx() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let rows = invoice_rows(&InvoiceData::sample()).unwrap();

        write_xlsx(&rows, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // XLSX is a zip archive
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_names_file_after_invoice() {
        let dir = tempfile::tempdir().unwrap();
        let invoice = InvoiceData::sample();

        let csv_path = export(&invoice, ExportFormat::Csv, dir.path()).unwrap();
        let xlsx_path = export(&invoice, ExportFormat::Xlsx, dir.path()).unwrap();

        assert_eq!(csv_path, dir.path().join("invoice-020-25-26.csv"));
        assert_eq!(xlsx_path, dir.path().join("invoice-020-25-26.xlsx"));
        assert!(csv_path.exists());
        assert!(xlsx_path.exists());
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = export(&InvoiceData::sample(), ExportFormat::Csv, &missing).unwrap_err();
        assert!(matches!(err, PrintError::Csv(_)));
    }
}
