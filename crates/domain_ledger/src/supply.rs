//! Supply records
//!
//! A supply is one customer's line on a day's supply sheet. Once recorded
//! it is never edited or deleted; corrections happen as new records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, Money, SupplyId};
use domain_directory::ServiceRates;

/// Jar and thermos counts for one direction (delivered or returned)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCount {
    pub jars: u32,
    pub thermos: u32,
}

impl UnitCount {
    pub fn new(jars: u32, thermos: u32) -> Self {
        Self { jars, thermos }
    }

    pub fn is_zero(&self) -> bool {
        self.jars == 0 && self.thermos == 0
    }
}

/// Net units currently with a customer (cumulative delivered minus returned)
///
/// Signed: nothing in the arithmetic stops a customer from returning more
/// than was delivered, and a negative holding is worth surfacing as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holdings {
    pub jars: i64,
    pub thermos: i64,
}

impl Holdings {
    pub fn is_zero(&self) -> bool {
        self.jars == 0 && self.thermos == 0
    }
}

/// One delivery/return/payment transaction for a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    /// Unique identifier
    pub id: SupplyId,
    /// The customer supplied; may be orphaned if the customer was later removed
    pub customer_id: CustomerId,
    /// Supply sheet date
    pub date: NaiveDate,
    /// Units handed to the customer
    pub delivered: UnitCount,
    /// Units taken back
    pub returned: UnitCount,
    /// Payment collected with this supply
    pub payment: Money,
}

impl Supply {
    /// Creates a new supply record with a fresh id
    pub fn new(
        customer_id: CustomerId,
        date: NaiveDate,
        delivered: UnitCount,
        returned: UnitCount,
        payment: Money,
    ) -> Self {
        Self {
            id: SupplyId::new_v7(),
            customer_id,
            date,
            delivered,
            returned,
            payment,
        }
    }

    /// The billable amount of this line at the given rates
    ///
    /// Only deliveries are charged; returns adjust holdings, never the bill.
    pub fn billable_amount(&self, rates: &ServiceRates) -> Money {
        rates.jar.times(self.delivered.jars) + rates.thermos.times(self.delivered.thermos)
    }
}
