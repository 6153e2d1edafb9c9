//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. Fixtures are consistent and
//! predictable so tests can assert exact amounts.

use chrono::NaiveDate;
use core_kernel::{BillingMonth, CustomerId, Money, SupplyId};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical per-jar rate
    pub fn jar_rate() -> Money {
        Money::new(dec!(50.00))
    }

    /// A typical per-thermos rate
    pub fn thermos_rate() -> Money {
        Money::new(dec!(30.00))
    }

    /// A typical security deposit
    pub fn deposit() -> Money {
        Money::new(dec!(500.00))
    }

    /// A typical on-the-spot payment
    pub fn payment() -> Money {
        Money::new(dec!(300.00))
    }

    /// A zero amount
    pub fn zero() -> Money {
        Money::zero()
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard supply sheet date (Mar 10, 2025)
    pub fn sheet_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    /// A later date inside the same month (Mar 20, 2025)
    pub fn later_in_month() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
    }

    /// A date in the following month (Apr 2, 2025)
    pub fn next_month_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()
    }

    /// The billing month the standard sheet date falls in
    pub fn billing_month() -> BillingMonth {
        BillingMonth::new(2025, 3).unwrap()
    }

    /// A billing month with no supplies in the standard fixtures
    pub fn empty_month() -> BillingMonth {
        BillingMonth::new(2025, 1).unwrap()
    }
}

/// Fixture for common string values
pub struct StringFixtures;

impl StringFixtures {
    /// A customer name
    pub fn name() -> &'static str {
        "Ravi Kumar"
    }

    /// A delivery area
    pub fn area() -> &'static str {
        "Shastri Nagar"
    }

    /// A second delivery area
    pub fn other_area() -> &'static str {
        "Gandhi Road"
    }

    /// A ten-digit mobile number
    pub fn mobile() -> &'static str {
        "9876543210"
    }

    /// A landmark
    pub fn landmark() -> &'static str {
        "near the temple"
    }
}

/// Fixture for identifier values
pub struct IdFixtures;

impl IdFixtures {
    /// A fresh customer id
    pub fn customer_id() -> CustomerId {
        CustomerId::new()
    }

    /// A fresh supply id
    pub fn supply_id() -> SupplyId {
        SupplyId::new()
    }
}
