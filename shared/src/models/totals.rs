//! Totals calculation inputs and outputs

use serde::{Deserialize, Serialize};

/// Minimal line input for the totals calculation
///
/// `amount` is taken as already equal to quantity × rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub amount: f64,
    pub tax_rate_percent: f64,
}

impl LineItem {
    pub fn new(amount: f64, tax_rate_percent: f64) -> Self {
        Self {
            amount,
            tax_rate_percent,
        }
    }
}

/// Invoice totals
///
/// Tax is always split into two equal halves: `cgst == sgst == total_tax / 2`.
/// Values are not rounded; rounding happens when they are formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub total_tax: f64,
    pub grand_total: f64,
}
