//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use domain_directory::{Customer, CustomerDirectory, CustomerDraft, ServicePreferences};
use domain_ledger::SupplyDraft;

use crate::fixtures::StringFixtures;

/// Builder for customer form drafts
pub struct CustomerDraftBuilder {
    name: String,
    area: String,
    mobile: String,
    landmark: String,
    security_money: String,
    preferences: ServicePreferences,
    jar_rate: String,
    thermos_rate: String,
}

impl Default for CustomerDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerDraftBuilder {
    /// Creates a builder for a jar-only customer at rate 50
    pub fn new() -> Self {
        Self {
            name: StringFixtures::name().to_string(),
            area: StringFixtures::area().to_string(),
            mobile: StringFixtures::mobile().to_string(),
            landmark: String::new(),
            security_money: String::new(),
            preferences: ServicePreferences::jar_only(),
            jar_rate: "50".to_string(),
            thermos_rate: String::new(),
        }
    }

    /// Sets the customer name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the delivery area
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Sets the mobile number
    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = mobile.into();
        self
    }

    /// Sets the landmark text
    pub fn with_landmark(mut self, landmark: impl Into<String>) -> Self {
        self.landmark = landmark.into();
        self
    }

    /// Sets the security deposit text
    pub fn with_security_money(mut self, amount: impl Into<String>) -> Self {
        self.security_money = amount.into();
        self
    }

    /// Sets the service preferences
    pub fn with_preferences(mut self, preferences: ServicePreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Sets the per-jar rate text
    pub fn with_jar_rate(mut self, rate: impl Into<String>) -> Self {
        self.jar_rate = rate.into();
        self
    }

    /// Sets the per-thermos rate text
    pub fn with_thermos_rate(mut self, rate: impl Into<String>) -> Self {
        self.thermos_rate = rate.into();
        self
    }

    /// Switches both services on with the given rates
    pub fn taking_both(mut self, jar_rate: &str, thermos_rate: &str) -> Self {
        self.preferences = ServicePreferences::both();
        self.jar_rate = jar_rate.to_string();
        self.thermos_rate = thermos_rate.to_string();
        self
    }

    /// Builds the draft
    pub fn build(self) -> CustomerDraft {
        CustomerDraft {
            name: self.name,
            area: self.area,
            mobile: self.mobile,
            landmark: self.landmark,
            security_money: self.security_money,
            preferences: self.preferences,
            jar_rate: self.jar_rate,
            thermos_rate: self.thermos_rate,
        }
    }
}

/// Builder for supply sheet rows
#[derive(Default)]
pub struct SupplyDraftBuilder {
    delivered_jars: String,
    delivered_thermos: String,
    returned_jars: String,
    returned_thermos: String,
    payment: String,
}

impl SupplyDraftBuilder {
    /// Creates a builder with every field blank
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delivered counts
    pub fn delivered(mut self, jars: u32, thermos: u32) -> Self {
        self.delivered_jars = jars.to_string();
        self.delivered_thermos = thermos.to_string();
        self
    }

    /// Sets the returned counts
    pub fn returned(mut self, jars: u32, thermos: u32) -> Self {
        self.returned_jars = jars.to_string();
        self.returned_thermos = thermos.to_string();
        self
    }

    /// Sets the payment text
    pub fn paying(mut self, payment: impl Into<String>) -> Self {
        self.payment = payment.into();
        self
    }

    /// Sets the delivered jar count as raw text
    pub fn with_delivered_jars_text(mut self, text: impl Into<String>) -> Self {
        self.delivered_jars = text.into();
        self
    }

    /// Builds the draft
    pub fn build(self) -> SupplyDraft {
        SupplyDraft {
            delivered_jars: self.delivered_jars,
            delivered_thermos: self.delivered_thermos,
            returned_jars: self.returned_jars,
            returned_thermos: self.returned_thermos,
            payment: self.payment,
        }
    }
}

/// Seeds a directory from a list of drafts, returning the created customers
/// in the same order
///
/// # Panics
///
/// Panics when a draft fails validation; seed data is expected to be valid.
pub fn seed_directory(drafts: &[CustomerDraft]) -> (CustomerDirectory, Vec<Customer>) {
    let mut directory = CustomerDirectory::new();
    let mut customers = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let (next, customer) = directory.add(draft).expect("seed draft should be valid");
        directory = next;
        customers.push(customer);
    }
    (directory, customers)
}
