//! The customer directory
//!
//! Owns the customer collection. Mutations are pure: `add`, `update`, and
//! `remove` leave `self` untouched and return the next version of the
//! directory, so a single controlling context can swap collections
//! atomically after each operation.

use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::draft::CustomerDraft;
use crate::error::DirectoryError;
use crate::validation::CustomerValidator;
use core_kernel::CustomerId;

/// The customer collection and its write/read operations
///
/// # Invariants
///
/// - Customer ids are unique within the directory
/// - Directory order is insertion order; updates keep a customer's slot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a directory from an existing collection (e.g. a loaded snapshot)
    pub fn from_customers(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    /// Validates a draft and appends a new customer
    ///
    /// Rates default to zero when the matching preference is off or the
    /// rate text is not a non-negative number.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Validation` when name, area, or mobile is
    /// blank; the directory is left unchanged.
    pub fn add(&self, draft: &CustomerDraft) -> Result<(Self, Customer), DirectoryError> {
        let result = CustomerValidator::validate(draft);
        if !result.is_valid {
            return Err(DirectoryError::validation(result.errors.join("; ")));
        }
        for warning in &result.warnings {
            tracing::debug!(%warning, "customer draft warning");
        }

        let customer = Customer::new(
            draft.name.trim(),
            draft.area.trim(),
            draft.mobile.trim(),
            draft.parsed_landmark(),
            draft.parsed_security_money(),
            draft.preferences,
            draft.parsed_rates(),
        );

        let mut customers = self.customers.clone();
        customers.push(customer.clone());

        tracing::info!(customer_id = %customer.id, area = %customer.area, "customer added");
        Ok((Self { customers }, customer))
    }

    /// Validates a draft and replaces the customer with the given id
    ///
    /// The customer's id and creation timestamp are preserved; every other
    /// field is taken from the draft.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Validation` on a blank required field and
    /// `DirectoryError::NotFound` when no customer has the id.
    pub fn update(
        &self,
        id: CustomerId,
        draft: &CustomerDraft,
    ) -> Result<(Self, Customer), DirectoryError> {
        let result = CustomerValidator::validate(draft);
        if !result.is_valid {
            return Err(DirectoryError::validation(result.errors.join("; ")));
        }

        let position = self
            .customers
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| DirectoryError::not_found(id))?;

        let existing = &self.customers[position];
        let updated = Customer {
            id: existing.id,
            name: draft.name.trim().to_string(),
            area: draft.area.trim().to_string(),
            mobile: draft.mobile.trim().to_string(),
            landmark: draft.parsed_landmark(),
            security_money: draft.parsed_security_money(),
            preferences: draft.preferences,
            rates: draft.parsed_rates(),
            created_at: existing.created_at,
        };

        let mut customers = self.customers.clone();
        customers[position] = updated.clone();

        tracing::info!(customer_id = %id, "customer updated");
        Ok((Self { customers }, updated))
    }

    /// Removes the customer with the given id; a no-op when absent
    pub fn remove(&self, id: CustomerId) -> Self {
        let customers: Vec<Customer> = self
            .customers
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        if customers.len() < self.customers.len() {
            tracing::info!(customer_id = %id, "customer removed");
        }
        Self { customers }
    }

    /// Looks up a customer by id
    pub fn find(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Returns true if a customer with the id exists
    pub fn contains(&self, id: CustomerId) -> bool {
        self.find(id).is_some()
    }

    /// All customers in directory order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Customers in the given area, in directory order
    pub fn in_area<'a>(&'a self, area: &'a str) -> impl Iterator<Item = &'a Customer> {
        self.customers.iter().filter(move |c| c.area == area)
    }

    /// Distinct areas in first-seen directory order
    pub fn areas(&self) -> Vec<String> {
        let mut areas: Vec<String> = Vec::new();
        for customer in &self.customers {
            if !areas.iter().any(|a| a == &customer.area) {
                areas.push(customer.area.clone());
            }
        }
        areas
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Consumes the directory, returning the raw collection
    pub fn into_customers(self) -> Vec<Customer> {
        self.customers
    }
}
