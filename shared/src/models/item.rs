//! Invoice Item Model

use super::LineItem;
use serde::{Deserialize, Serialize};

/// One row of the goods table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: String,
    pub description: String,
    /// HSN/SAC classification code
    #[serde(default)]
    pub hsn: String,
    pub quantity: f64,
    pub rate: f64,
    /// Combined GST rate in percent (split evenly into CGST and SGST)
    pub gst_rate: f64,
    /// Line amount as entered; expected to equal quantity × rate
    pub amount: f64,
    /// Unit printed in the "per" column
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "CFT".to_string()
}

impl InvoiceItem {
    /// Project this row onto the totals calculation input
    pub fn line_item(&self) -> LineItem {
        LineItem::new(self.amount, self.gst_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metal_mix() -> InvoiceItem {
        InvoiceItem {
            id: "1".to_string(),
            description: "Metal Mix".to_string(),
            hsn: "251710".to_string(),
            quantity: 912.5,
            rate: 30.0,
            gst_rate: 5.0,
            amount: 27375.0,
            unit: "CFT".to_string(),
        }
    }

    #[test]
    fn test_line_item_projection() {
        let line = metal_mix().line_item();
        assert_eq!(line.amount, 27375.0);
        assert_eq!(line.tax_rate_percent, 5.0);
    }

    #[test]
    fn test_deserialize_defaults_unit() {
        let json = r#"{
            "id": "7",
            "description": "Sand",
            "quantity": 2,
            "rate": 10.5,
            "gstRate": 18,
            "amount": 21
        }"#;
        let item: InvoiceItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.unit, "CFT");
        assert_eq!(item.hsn, "");
        assert_eq!(item.gst_rate, 18.0);
    }
}
