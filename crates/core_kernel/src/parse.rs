//! Lenient parsing for form-sourced numeric input
//!
//! Supply sheets and customer forms arrive as free text. The business rule
//! is that blank or unparseable numeric input means zero, never an error, so
//! defaulting lives in exactly two functions applied at the directory and
//! ledger boundaries.

use crate::money::Money;
use rust_decimal::Decimal;

/// Parses a non-negative integer count; blank, junk, or negative input is 0
pub fn non_negative_int(text: &str) -> u32 {
    text.trim()
        .parse::<i64>()
        .ok()
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}

/// Parses a non-negative rupee amount; blank, junk, or negative input is 0
pub fn non_negative_amount(text: &str) -> Money {
    text.trim()
        .parse::<Decimal>()
        .ok()
        .filter(|v| !v.is_sign_negative())
        .map(Money::new)
        .unwrap_or_else(Money::zero)
}
