//! Display formatting for rupee amounts
//!
//! Indian grouping puts the first comma after three digits and every
//! following comma after two: `1234567.891 → "12,34,567.89"`.

use crate::money::round_money;
use rust_decimal::prelude::*;

/// Group the digits of an unsigned integer string Indian-style
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail];
    while head.len() > 2 {
        let (rest, group) = head.split_at(head.len() - 2);
        groups.push(group);
        head = rest;
    }
    if !head.is_empty() {
        groups.push(head);
    }

    groups.reverse();
    groups.join(",")
}

/// Rounded two-decimal text, `"-1234.50"`
///
/// Finite values outside the Decimal range are printed from the f64 as is.
/// NaN and infinities print as zero.
fn two_decimals(amount: f64) -> String {
    match Decimal::from_f64(amount) {
        Some(value) => {
            let mut rounded = round_money(value);
            if rounded.is_zero() {
                rounded.set_sign_positive(true);
            }
            rounded.rescale(2);
            rounded.to_string()
        }
        None if amount.is_finite() => format!("{:.2}", amount),
        None => "0.00".to_string(),
    }
}

/// Split an amount into (is_negative, "12,34,567.89")
fn grouped(amount: f64) -> (bool, String) {
    let text = two_decimals(amount);
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.as_str()),
    };
    let (whole, paise) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    (negative, format!("{}.{}", group_indian(whole), paise))
}

/// Format with Indian digit grouping and two decimals, no currency symbol
pub fn format_amount(amount: f64) -> String {
    match grouped(amount) {
        (true, s) => format!("-{}", s),
        (false, s) => s,
    }
}

/// Format as rupees: `28743.75 → "₹28,743.75"`, `-1000.0 → "-₹1,000.00"`
pub fn format_inr(amount: f64) -> String {
    match grouped(amount) {
        (true, s) => format!("-₹{}", s),
        (false, s) => format!("₹{}", s),
    }
}

/// Two decimals, no grouping (spreadsheet cells)
pub fn format_plain(amount: f64) -> String {
    two_decimals(amount)
}

/// Plain number without trailing zeros: `912.50 → "912.5"`, `30.0 → "30"`
pub fn format_number(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(d) => d.normalize().to_string(),
        None if value.is_finite() => value.to_string(),
        None => "0".to_string(),
    }
}

/// Percentage without trailing zeros: `5.0 → "5%"`, `2.5 → "2.5%"`
pub fn format_rate(percent: f64) -> String {
    format!("{}%", format_number(percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian("0"), "0");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("28743"), "28,743");
        assert_eq!(group_indian("100000"), "1,00,000");
        assert_eq!(group_indian("1234567"), "12,34,567");
        assert_eq!(group_indian("10000000"), "1,00,00,000");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(28743.75), "₹28,743.75");
        assert_eq!(format_inr(1234567.891), "₹12,34,567.89");
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(684.375), "₹684.38");
        assert_eq!(format_inr(-1000.0), "-₹1,000.00");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(27375.0), "27,375.00");
        assert_eq!(format_amount(5.5), "5.50");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_format_beyond_decimal_range() {
        let plain = format!("{:.2}", 1e30);
        assert_eq!(format_plain(1e30), plain);
        assert_eq!(format_plain(-1e30), format!("-{}", plain));

        let inr = format_inr(1e30);
        assert_ne!(inr, "₹0.00");
        assert_eq!(inr.replace(',', ""), format!("₹{}", plain));
        assert!(inr.starts_with("₹10,00,00,"));
        assert!(format_inr(-1e30).starts_with("-₹10,00,00,"));

        assert_eq!(format_number(1e30), 1e30_f64.to_string());
        assert_eq!(format_inr(f64::NAN), "₹0.00");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(27375.0), "27375.00");
        assert_eq!(format_plain(30.0), "30.00");
        assert_eq!(format_plain(684.375), "684.38");
        assert_eq!(format_plain(1368.75), "1368.75");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(912.5), "912.5");
        assert_eq!(format_number(30.0), "30");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(5.0), "5%");
        assert_eq!(format_rate(2.5), "2.5%");
        assert_eq!(format_rate(18.0), "18%");
    }
}
