//! Invoice Model

use super::{BankInfo, InvoiceItem, LineItem, PartyInfo};
use serde::{Deserialize, Serialize};

/// Complete tax invoice record
///
/// Held in memory for one run; built either from [`InvoiceData::sample`] or
/// deserialized from a JSON file with the same camelCase shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    pub invoice_number: String,
    pub date: String,
    /// Consignee (ship to)
    pub seller: PartyInfo,
    /// Buyer (bill to)
    pub buyer: PartyInfo,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    pub bank_details: BankInfo,
    #[serde(default)]
    pub declaration: String,

    // === Reference fields ===
    #[serde(default)]
    pub delivery_note: String,
    #[serde(default)]
    pub payment_terms: String,
    #[serde(default)]
    pub reference_no: String,
    #[serde(default)]
    pub reference_date: String,
    #[serde(default)]
    pub other_references: String,
    #[serde(default)]
    pub buyer_order_no: String,
    #[serde(default)]
    pub buyer_order_date: String,
    #[serde(default)]
    pub dispatch_doc_no: String,
    #[serde(default)]
    pub delivery_note_date: String,
    #[serde(default)]
    pub dispatched_through: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub terms_of_delivery: String,
}

impl InvoiceData {
    /// Totals calculation input, one entry per item in table order
    pub fn line_items(&self) -> Vec<LineItem> {
        self.items.iter().map(InvoiceItem::line_item).collect()
    }

    /// Sample invoice used when no invoice file is supplied
    pub fn sample() -> Self {
        Self {
            invoice_number: "020/25-26".to_string(),
            date: "24-Apr-25".to_string(),
            seller: PartyInfo {
                name: "NAVNEET ULTRALITE".to_string(),
                address: "Shop No 4, Niharika Complex, Appartment. Mankapur Ring Road, Nagpur 440030"
                    .to_string(),
                gstin: "27AWFPG8630F1ZL".to_string(),
                state_name: "Maharashtra".to_string(),
                state_code: "27".to_string(),
            },
            buyer: PartyInfo {
                name: "B C Biyani Projects Pvt Ltd".to_string(),
                address: "Nagpur".to_string(),
                gstin: "27AACCB3617R1ZB".to_string(),
                state_name: "Maharashtra".to_string(),
                state_code: "27".to_string(),
            },
            items: vec![InvoiceItem {
                id: "1".to_string(),
                description: "Metal Mix".to_string(),
                hsn: "251710".to_string(),
                quantity: 912.5,
                rate: 30.00,
                gst_rate: 5.0,
                amount: 27375.00,
                unit: "CFT".to_string(),
            }],
            bank_details: BankInfo {
                account_name: "NAVNEET ULTRALITE".to_string(),
                bank_name: "Punjab National Bank".to_string(),
                account_number: "6226005000000886".to_string(),
                ifsc_code: "PUNB0622600".to_string(),
            },
            declaration: "we declare that this invoice the actual price of the goods described and that all the particulars are correct and true".to_string(),
            delivery_note: "DN-2025-001".to_string(),
            payment_terms: "Net 30 Days".to_string(),
            reference_no: "REF-2025-ABC".to_string(),
            reference_date: "20-Apr-25".to_string(),
            other_references: "PO-2025-XYZ".to_string(),
            buyer_order_no: "BO-2025-123".to_string(),
            buyer_order_date: "18-Apr-25".to_string(),
            dispatch_doc_no: "DD-2025-456".to_string(),
            delivery_note_date: "24-Apr-25".to_string(),
            dispatched_through: "Road Transport".to_string(),
            destination: "Nagpur, Maharashtra".to_string(),
            terms_of_delivery: "FOB Destination".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_single_item() {
        let invoice = InvoiceData::sample();
        assert_eq!(invoice.invoice_number, "020/25-26");
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items[0].hsn, "251710");
    }

    #[test]
    fn test_line_items() {
        let lines = InvoiceData::sample().line_items();
        assert_eq!(lines, vec![LineItem::new(27375.0, 5.0)]);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = serde_json::to_value(InvoiceData::sample()).unwrap();
        assert_eq!(json["invoiceNumber"], "020/25-26");
        assert_eq!(json["bankDetails"]["ifscCode"], "PUNB0622600");
        assert_eq!(json["items"][0]["gstRate"], 5.0);
        assert_eq!(json["seller"]["stateCode"], "27");
    }

    #[test]
    fn test_minimal_json_fills_defaults() {
        let json = r#"{
            "invoiceNumber": "001/25-26",
            "date": "01-Apr-25",
            "seller": { "name": "Seller" },
            "buyer": { "name": "Buyer" },
            "bankDetails": {
                "accountName": "Seller",
                "bankName": "Bank",
                "accountNumber": "1",
                "ifscCode": "BANK0000001"
            }
        }"#;
        let invoice: InvoiceData = serde_json::from_str(json).unwrap();
        assert!(invoice.items.is_empty());
        assert_eq!(invoice.seller.state_name, "Maharashtra");
        assert_eq!(invoice.destination, "");
    }
}
