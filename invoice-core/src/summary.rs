//! Per-HSN tax summary
//!
//! One row per distinct (HSN code, GST rate) pair, in first-seen order,
//! with the rate split into equal CGST and SGST halves.

use crate::money::{Money, line_tax};
use serde::Serialize;
use shared::models::InvoiceItem;

/// One row of the tax summary table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HsnSummary {
    pub hsn: String,
    pub taxable_value: f64,
    pub cgst_rate: f64,
    pub cgst_amount: f64,
    pub sgst_rate: f64,
    pub sgst_amount: f64,
    pub total_tax: f64,
}

/// Build the tax summary rows for the given items
pub fn tax_summary(items: &[InvoiceItem]) -> Vec<HsnSummary> {
    // (hsn, gst_rate, taxable value, tax)
    let mut groups: Vec<(&str, f64, Money, Money)> = Vec::new();

    for item in items {
        let amount = Money::from_f64(item.amount);
        let tax = line_tax(&item.line_item());

        if let Some(group) = groups
            .iter_mut()
            .find(|g| g.0 == item.hsn && g.1 == item.gst_rate)
        {
            group.2 = group.2.plus(amount);
            group.3 = group.3.plus(tax);
        } else {
            groups.push((item.hsn.as_str(), item.gst_rate, amount, tax));
        }
    }

    groups
        .into_iter()
        .map(|(hsn, rate, taxable, tax)| {
            let total_tax = tax.to_f64();
            HsnSummary {
                hsn: hsn.to_string(),
                taxable_value: taxable.to_f64(),
                cgst_rate: rate / 2.0,
                cgst_amount: total_tax / 2.0,
                sgst_rate: rate / 2.0,
                sgst_amount: total_tax / 2.0,
                total_tax,
            }
        })
        .collect()
}

/// The "Total" row under the summary table
///
/// Rates are left at zero; the table prints them blank.
pub fn summary_total(rows: &[HsnSummary]) -> HsnSummary {
    let (taxable, tax) = rows
        .iter()
        .fold((Money::ZERO, Money::ZERO), |(taxable, tax), row| {
            (
                taxable.plus(Money::from_f64(row.taxable_value)),
                tax.plus(Money::from_f64(row.total_tax)),
            )
        });
    let total_tax = tax.to_f64();

    HsnSummary {
        hsn: "Total".to_string(),
        taxable_value: taxable.to_f64(),
        cgst_rate: 0.0,
        cgst_amount: total_tax / 2.0,
        sgst_rate: 0.0,
        sgst_amount: total_tax / 2.0,
        total_tax,
    }
}
