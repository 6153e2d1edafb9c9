//! Customer entity
//!
//! A customer is identified by area and mobile for delivery routing, opts in
//! to jar and/or thermos service, and carries the per-unit rates used by the
//! billing engine. The id and creation timestamp are stamped once and never
//! change across updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, Money};

/// Which services a customer takes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePreferences {
    /// Takes water jars
    pub jar: bool,
    /// Takes thermos flasks
    pub thermos: bool,
}

impl ServicePreferences {
    pub fn jar_only() -> Self {
        Self {
            jar: true,
            thermos: false,
        }
    }

    pub fn both() -> Self {
        Self {
            jar: true,
            thermos: true,
        }
    }
}

/// Per-unit rates for the services a customer takes
///
/// A rate is meaningful only when the matching preference is on; rates for
/// unselected services default to zero but are not forced to stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRates {
    /// Rate per jar delivered
    pub jar: Money,
    /// Rate per thermos delivered
    pub thermos: Money,
}

/// A customer of the delivery business
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier, immutable after creation
    pub id: CustomerId,
    /// Customer name
    pub name: String,
    /// Delivery area
    pub area: String,
    /// Contact mobile number
    pub mobile: String,
    /// Optional landmark for the delivery address
    pub landmark: Option<String>,
    /// Security deposit held against jars/thermos, if any
    pub security_money: Option<Money>,
    /// Services the customer takes
    pub preferences: ServicePreferences,
    /// Per-unit billing rates
    pub rates: ServiceRates,
    /// When the customer was added
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new customer with a fresh id and creation timestamp
    pub fn new(
        name: impl Into<String>,
        area: impl Into<String>,
        mobile: impl Into<String>,
        landmark: Option<String>,
        security_money: Option<Money>,
        preferences: ServicePreferences,
        rates: ServiceRates,
    ) -> Self {
        Self {
            id: CustomerId::new_v7(),
            name: name.into(),
            area: area.into(),
            mobile: mobile.into(),
            landmark,
            security_money,
            preferences,
            rates,
            created_at: Utc::now(),
        }
    }

    /// Display label used in pick lists, e.g. "Ravi Kumar - North Colony"
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.name, self.area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_stamps_id_and_timestamp() {
        let a = Customer::new(
            "Ravi",
            "North",
            "9800000001",
            None,
            None,
            ServicePreferences::jar_only(),
            ServiceRates::default(),
        );
        let b = Customer::new(
            "Sita",
            "North",
            "9800000002",
            None,
            None,
            ServicePreferences::both(),
            ServiceRates::default(),
        );
        assert_ne!(a.id, b.id);
        assert!(a.created_at <= Utc::now());
    }

    #[test]
    fn test_customer_serde_round_trip() {
        let customer = Customer::new(
            "Ravi",
            "North",
            "9800000001",
            Some("near the temple".into()),
            Some(Money::from_rupees(500)),
            ServicePreferences::both(),
            ServiceRates {
                jar: Money::from_rupees(50),
                thermos: Money::from_rupees(30),
            },
        );

        let json = serde_json::to_string(&customer).unwrap();
        let back: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, customer);
    }

    #[test]
    fn test_display_label() {
        let c = Customer::new(
            "Ravi Kumar",
            "North Colony",
            "9800000001",
            None,
            None,
            ServicePreferences::default(),
            ServiceRates::default(),
        );
        assert_eq!(c.display_label(), "Ravi Kumar - North Colony");
    }
}
