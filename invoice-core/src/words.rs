//! Amount in words, Indian numbering scale
//!
//! Digits are grouped the Indian way: the lowest group holds three digits
//! (units, tens, hundreds), every group above it holds two:
//!
//! ```text
//!   12,34,567.89
//!   │  │  └── 567 → "Five Hundred Sixty Seven"
//!   │  └───── 34  → "Thirty Four Thousand"
//!   └──────── 12  → "Twelve Lakh"
//!             .89 → "and Eighty Nine Paise"
//! ```
//!
//! Scale words run Thousand (10^3), Lakh (10^5), Crore (10^7), Arab (10^9),
//! Kharab (10^11). Amounts whose integer part reaches 10^13 are rejected.

use crate::error::WordsError;
use crate::money::to_decimal;
use rust_decimal::prelude::*;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Scale word for each chunk, lowest first
const SCALES: [&str; 6] = ["", "Thousand", "Lakh", "Crore", "Arab", "Kharab"];

/// Smallest integer part with no scale word (10^13)
const MAX_WHOLE: u64 = 10_000_000_000_000;

/// Convert an amount to its "Amount Chargeable (in words)" text
///
/// The amount is rounded to paise (half to even) before it is split, so
/// `1.999` reads "Two Only" instead of carrying 100 paise. Rounding applies
/// to the shortest decimal form of the `f64`, not its exact binary value:
/// `2.675` is stored as 2.67499999... but rounds as `2.675`, giving
/// "Sixty Eight Paise", while `2.665` rounds down to "Sixty Six Paise".
///
/// An amount that rounds to zero returns the bare word `"Zero"` without the
/// `" Only"` suffix. Every other result ends in `" Only"`.
///
/// # Errors
///
/// - [`WordsError::InvalidArgument`] for negative, NaN or infinite input
/// - [`WordsError::OutOfRange`] when the integer part is 10^13 or more
pub fn amount_in_words(amount: f64) -> Result<String, WordsError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(WordsError::InvalidArgument(amount));
    }
    // Checked before the Decimal conversion, which maps huge values to zero
    if amount >= MAX_WHOLE as f64 {
        return Err(WordsError::OutOfRange(amount));
    }

    let rounded = to_decimal(amount).round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    if rounded.is_zero() {
        return Ok("Zero".to_string());
    }

    let whole = rounded.trunc();
    let paise = ((rounded - whole) * Decimal::ONE_HUNDRED)
        .to_u64()
        .unwrap_or_default();
    let whole = whole.to_u64().unwrap_or_default();
    // Rounding can still carry 9_999_999_999_999.995 up to the limit
    if whole >= MAX_WHOLE {
        return Err(WordsError::OutOfRange(amount));
    }

    let mut words = if whole == 0 {
        "Zero".to_string()
    } else {
        integer_to_words(whole)
    };

    if paise > 0 {
        words.push_str(" and ");
        words.push_str(&chunk_to_words(paise));
        words.push_str(" Paise");
    }
    words.push_str(" Only");

    Ok(words)
}

/// Words for a positive integer below 10^13, Indian grouping
fn integer_to_words(n: u64) -> String {
    // Collected lowest group first, reversed at the end
    let mut parts: Vec<String> = Vec::new();
    let mut remaining = n;
    let mut scale = 0;

    while remaining > 0 {
        let divisor = if scale == 0 { 1000 } else { 100 };
        let chunk = remaining % divisor;
        remaining /= divisor;

        if chunk > 0 {
            let mut part = chunk_to_words(chunk);
            if let Some(word) = SCALES.get(scale).filter(|w| !w.is_empty()) {
                part.push(' ');
                part.push_str(word);
            }
            parts.push(part);
        }
        scale += 1;
    }

    parts.reverse();
    parts.join(" ")
}

/// Words for 1..=999; zero yields an empty string
fn chunk_to_words(chunk: u64) -> String {
    let hundreds = (chunk / 100 % 10) as usize;
    let rest = (chunk % 100) as usize;
    let mut words: Vec<&str> = Vec::with_capacity(4);

    if hundreds > 0 {
        words.push(ONES[hundreds]);
        words.push("Hundred");
    }

    match rest {
        20.. => {
            words.push(TENS[rest / 10]);
            if rest % 10 > 0 {
                words.push(ONES[rest % 10]);
            }
        }
        10..=19 => words.push(TEENS[rest - 10]),
        1..=9 => words.push(ONES[rest]),
        _ => {}
    }

    words.join(" ")
}
