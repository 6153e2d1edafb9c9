//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful error
//! messages than standard assertions.

use core_kernel::Money;
use domain_ledger::Holdings;
use rust_decimal::Decimal;

/// Asserts that a Money value equals the given rupee amount
///
/// # Panics
///
/// Panics when the amounts differ.
pub fn assert_rupees(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Expected ₹{}, got {}",
        expected,
        actual
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {}", money);
}

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(money.is_positive(), "Expected positive money, got {}", money);
}

/// Asserts that a Money value is negative
pub fn assert_money_negative(money: &Money) {
    assert!(money.is_negative(), "Expected negative money, got {}", money);
}

/// Asserts that holdings match the given jar and thermos counts
///
/// # Panics
///
/// Panics when either count differs.
pub fn assert_holdings(actual: &Holdings, jars: i64, thermos: i64) {
    assert_eq!(
        (actual.jars, actual.thermos),
        (jars, thermos),
        "Expected holdings jars={} thermos={}, got jars={} thermos={}",
        jars,
        thermos,
        actual.jars,
        actual.thermos
    );
}

/// Asserts that money parts sum to the expected total
///
/// # Panics
///
/// Panics when the sum differs from the total.
pub fn assert_money_sums_to(parts: &[Money], total: &Money) {
    let sum: Money = parts.iter().copied().sum();
    assert_eq!(
        sum, *total,
        "Parts sum to {}, expected {}",
        sum, total
    );
}
