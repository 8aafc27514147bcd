//! Party and Bank Models

use serde::{Deserialize, Serialize};

/// Seller (consignee) or buyer block printed on the invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyInfo {
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// GST identification number (GSTIN/UIN)
    #[serde(default)]
    pub gstin: String,
    #[serde(default = "default_state_name")]
    pub state_name: String,
    /// Two-digit GST state code, e.g. "27" for Maharashtra
    #[serde(default)]
    pub state_code: String,
}

fn default_state_name() -> String {
    "Maharashtra".to_string()
}

/// Company bank details printed under the declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankInfo {
    pub account_name: String,
    pub bank_name: String,
    pub account_number: String,
    pub ifsc_code: String,
}
