//! Money calculation utilities using rust_decimal for precision
//!
//! Amounts cross the API as `f64`. Sums and per-line tax are computed with
//! `Decimal` so that long item lists do not accumulate binary-float drift,
//! then converted back to `f64` without rounding. Once a value or an
//! intermediate result leaves the `Decimal` range (about 7.9e28) the
//! calculation continues in plain `f64` so the totals formulas still hold.

use rust_decimal::prelude::*;
use shared::models::{LineItem, Totals};

/// Rounding for displayed monetary values (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// NaN, infinities and values outside the Decimal range become zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 (no rounding)
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Round to 2 decimal places, half away from zero (display rounding)
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// A monetary value that is exact while it fits in `Decimal`
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Money {
    Exact(Decimal),
    Float(f64),
}

impl Money {
    pub(crate) const ZERO: Money = Money::Exact(Decimal::ZERO);

    /// NaN and infinities count as zero
    pub(crate) fn from_f64(value: f64) -> Money {
        if !value.is_finite() {
            return Money::ZERO;
        }
        match Decimal::from_f64(value) {
            Some(d) => Money::Exact(d),
            None => Money::Float(value),
        }
    }

    pub(crate) fn to_f64(self) -> f64 {
        match self {
            Money::Exact(d) => to_f64(d),
            Money::Float(f) => f,
        }
    }

    pub(crate) fn plus(self, other: Money) -> Money {
        if let (Money::Exact(a), Money::Exact(b)) = (self, other) {
            if let Some(sum) = a.checked_add(b) {
                return Money::Exact(sum);
            }
        }
        Money::Float(self.to_f64() + other.to_f64())
    }

    /// `self × rate / 100`
    pub(crate) fn percent(self, rate: Money) -> Money {
        if let (Money::Exact(a), Money::Exact(r)) = (self, rate) {
            if let Some(tax) = a
                .checked_mul(r)
                .and_then(|p| p.checked_div(Decimal::ONE_HUNDRED))
            {
                return Money::Exact(tax);
            }
        }
        Money::Float(self.to_f64() * rate.to_f64() / 100.0)
    }
}

/// Tax for one line at its own rate: amount × rate / 100
pub(crate) fn line_tax(item: &LineItem) -> Money {
    Money::from_f64(item.amount).percent(Money::from_f64(item.tax_rate_percent))
}

/// Compute invoice totals from line items
///
/// - `subtotal` is the sum of line amounts
/// - `total_tax` is the sum of per-line tax, each at the line's own rate
/// - `cgst` and `sgst` are each exactly half of `total_tax`
/// - `grand_total = subtotal + total_tax`
///
/// Negative amounts and rates are not rejected; they propagate arithmetically.
/// NaN and infinite inputs count as zero.
pub fn compute_totals(items: &[LineItem]) -> Totals {
    let (subtotal, tax) = items
        .iter()
        .fold((Money::ZERO, Money::ZERO), |(subtotal, tax), item| {
            (
                subtotal.plus(Money::from_f64(item.amount)),
                tax.plus(line_tax(item)),
            )
        });

    let total_tax = tax.to_f64();
    // Halving in f64 is exact, so cgst + sgst == total_tax holds bit for bit
    let half = total_tax / 2.0;

    let totals = Totals {
        subtotal: subtotal.to_f64(),
        cgst: half,
        sgst: half,
        total_tax,
        grand_total: subtotal.plus(tax).to_f64(),
    };

    tracing::debug!(
        items = items.len(),
        subtotal = totals.subtotal,
        total_tax = totals.total_tax,
        grand_total = totals.grand_total,
        exact = matches!((subtotal, tax), (Money::Exact(_), Money::Exact(_))),
        "Computed invoice totals"
    );

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);

        let sum_dec = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(round_money(sum_dec)), 0.3);
    }

    #[test]
    fn test_to_decimal_nan_becomes_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
        assert_eq!(to_decimal(f64::NEG_INFINITY), Decimal::ZERO);
        assert_eq!(to_decimal(f64::MAX), Decimal::ZERO);
    }

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(dec!(684.375)), dec!(684.38));
        assert_eq!(round_money(dec!(-684.375)), dec!(-684.38));
        assert_eq!(round_money(dec!(1.004)), dec!(1.00));
    }

    #[test]
    fn test_empty_items_all_zero() {
        assert_eq!(compute_totals(&[]), Totals::default());
    }

    #[test]
    fn test_single_item_five_percent() {
        let totals = compute_totals(&[LineItem::new(27375.00, 5.0)]);
        assert_eq!(totals.subtotal, 27375.00);
        assert_eq!(totals.cgst, 684.375);
        assert_eq!(totals.sgst, 684.375);
        assert_eq!(totals.total_tax, 1368.75);
        assert_eq!(totals.grand_total, 28743.75);
    }

    #[test]
    fn test_tax_is_per_line_rate() {
        // 1000 @ 5% + 2000 @ 18% = 50 + 360, not a blended rate
        let totals = compute_totals(&[LineItem::new(1000.0, 5.0), LineItem::new(2000.0, 18.0)]);
        assert_eq!(totals.subtotal, 3000.0);
        assert_eq!(totals.total_tax, 410.0);
        assert_eq!(totals.cgst, 205.0);
        assert_eq!(totals.grand_total, 3410.0);
    }

    #[test]
    fn test_negative_amounts_propagate() {
        let totals = compute_totals(&[LineItem::new(500.0, 12.0), LineItem::new(-200.0, 12.0)]);
        assert_eq!(totals.subtotal, 300.0);
        assert_eq!(totals.total_tax, 36.0);
        assert_eq!(totals.grand_total, 336.0);
    }

    #[test]
    fn test_negative_rate_propagates() {
        let totals = compute_totals(&[LineItem::new(100.0, -10.0)]);
        assert_eq!(totals.total_tax, -10.0);
        assert_eq!(totals.cgst, -5.0);
        assert_eq!(totals.grand_total, 90.0);
    }

    #[test]
    fn test_many_small_items_no_drift() {
        let items: Vec<LineItem> = (0..1000).map(|_| LineItem::new(0.1, 18.0)).collect();
        let totals = compute_totals(&items);
        assert_eq!(totals.subtotal, 100.0);
        assert_eq!(totals.total_tax, 18.0);
        assert_eq!(totals.grand_total, 118.0);
    }

    #[test]
    fn test_nan_amount_treated_as_zero() {
        let totals = compute_totals(&[LineItem::new(f64::NAN, 5.0), LineItem::new(100.0, 5.0)]);
        assert_eq!(totals.subtotal, 100.0);
        assert_eq!(totals.total_tax, 5.0);
    }

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff <= expected.abs() * 1e-12,
            "{} is not close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_amount_beyond_decimal_range() {
        let totals = compute_totals(&[LineItem::new(1e30, 5.0)]);
        assert_eq!(totals.subtotal, 1e30);
        assert_close(totals.total_tax, 5e28);
        assert_eq!(totals.cgst, totals.total_tax / 2.0);
        assert_eq!(totals.cgst + totals.sgst, totals.total_tax);
        assert_close(totals.grand_total, 1.05e30);
    }

    #[test]
    fn test_tax_product_beyond_decimal_range() {
        // Both inputs fit in Decimal, their product does not
        let totals = compute_totals(&[LineItem::new(1e20, 1e10)]);
        assert_eq!(totals.subtotal, 1e20);
        assert_close(totals.total_tax, 1e28);
        assert_close(totals.grand_total, 1e28 + 1e20);
    }

    #[test]
    fn test_sum_beyond_decimal_range() {
        let totals = compute_totals(&[LineItem::new(7e28, 0.0), LineItem::new(7e28, 0.0)]);
        assert_close(totals.subtotal, 1.4e29);
        assert_eq!(totals.total_tax, 0.0);
        assert_close(totals.grand_total, 1.4e29);
    }

    #[test]
    fn test_money_stays_exact_in_range() {
        let sum = Money::from_f64(0.1).plus(Money::from_f64(0.2));
        assert_eq!(sum, Money::Exact(dec!(0.3)));
        assert_eq!(Money::from_f64(1e30), Money::Float(1e30));
        assert_eq!(Money::from_f64(f64::NAN), Money::ZERO);
        assert_eq!(Money::from_f64(f64::INFINITY), Money::ZERO);
    }
}
