//! The supply ledger
//!
//! An append-only journal of supply records. `record_batch` is the only way
//! records get in; reads are pure aggregations over the full history.
//!
//! The ledger does not validate customer ids against the directory: a sheet
//! row for a customer who was removed (or never existed) is still recorded,
//! and the read side treats such records as rate-less.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::draft::SupplyDraft;
use crate::supply::{Holdings, Supply};
use core_kernel::{CustomerId, Money};
use domain_directory::CustomerDirectory;

/// The supply collection and its append/read operations
///
/// # Invariants
///
/// - Records are append-only and immutable
/// - Ledger order is insertion order; batches preserve entry order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplyLedger {
    supplies: Vec<Supply>,
}

impl SupplyLedger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from an existing collection (e.g. a loaded snapshot)
    pub fn from_supplies(supplies: Vec<Supply>) -> Self {
        Self { supplies }
    }

    /// Records one supply sheet: one record per entry, stamped with the
    /// sheet date, appended in entry order
    ///
    /// Counts and payments are parsed leniently (blank or junk is zero).
    /// Entries for unknown customers are recorded as given.
    pub fn record_batch(
        &self,
        date: NaiveDate,
        entries: &[(CustomerId, SupplyDraft)],
    ) -> (Self, Vec<Supply>) {
        let recorded: Vec<Supply> = entries
            .iter()
            .map(|(customer_id, draft)| {
                Supply::new(
                    *customer_id,
                    date,
                    draft.parsed_delivered(),
                    draft.parsed_returned(),
                    draft.parsed_payment(),
                )
            })
            .collect();

        let mut supplies = self.supplies.clone();
        supplies.extend(recorded.iter().cloned());

        tracing::info!(%date, count = recorded.len(), "supply batch recorded");
        (Self { supplies }, recorded)
    }

    /// Net units currently with the customer; zero when there are no supplies
    pub fn holdings_for(&self, customer_id: CustomerId) -> Holdings {
        self.supplies_for(customer_id)
            .fold(Holdings::default(), |acc, s| Holdings {
                jars: acc.jars + s.delivered.jars as i64 - s.returned.jars as i64,
                thermos: acc.thermos + s.delivered.thermos as i64 - s.returned.thermos as i64,
            })
    }

    /// Lifetime amount owed: billable deliveries minus payments
    ///
    /// A customer id missing from the directory has unknown rates and is
    /// treated as owing nothing rather than as an error.
    pub fn dues_for(&self, customer_id: CustomerId, directory: &CustomerDirectory) -> Money {
        let Some(customer) = directory.find(customer_id) else {
            return Money::zero();
        };
        self.supplies_for(customer_id)
            .map(|s| s.billable_amount(&customer.rates) - s.payment)
            .sum()
    }

    /// All supplies for a customer, in ledger order
    pub fn supplies_for(&self, customer_id: CustomerId) -> impl Iterator<Item = &Supply> {
        self.supplies
            .iter()
            .filter(move |s| s.customer_id == customer_id)
    }

    /// All supplies in ledger order
    pub fn supplies(&self) -> &[Supply] {
        &self.supplies
    }

    pub fn len(&self) -> usize {
        self.supplies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supplies.is_empty()
    }

    /// Consumes the ledger, returning the raw collection
    pub fn into_supplies(self) -> Vec<Supply> {
        self.supplies
    }
}
