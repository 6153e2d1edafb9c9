//! The snapshot store port
//!
//! One trait, two operations: load the whole state, save the whole state.
//! The collections are small (a route's worth of customers and their supply
//! history), so whole-snapshot semantics keep every adapter trivial and
//! make the caller's replace-whole-collection update style atomic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use domain_directory::{Customer, CustomerDirectory};
use domain_ledger::{Supply, SupplyLedger};

/// The full persisted state: both collections, captured together
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub customers: Vec<Customer>,
    pub supplies: Vec<Supply>,
}

impl Snapshot {
    /// Captures the current state of both collections
    pub fn capture(directory: &CustomerDirectory, ledger: &SupplyLedger) -> Self {
        Self {
            customers: directory.customers().to_vec(),
            supplies: ledger.supplies().to_vec(),
        }
    }

    /// Rebuilds the collections from this snapshot
    pub fn restore(self) -> (CustomerDirectory, SupplyLedger) {
        (
            CustomerDirectory::from_customers(self.customers),
            SupplyLedger::from_supplies(self.supplies),
        )
    }
}

/// Port for loading and saving the application snapshot
///
/// Implementations must make `save` atomic with respect to `load`: a load
/// observes either the previous snapshot or the new one, never a mix.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the last saved snapshot; an empty snapshot when none was saved
    async fn load(&self) -> Result<Snapshot, StoreError>;

    /// Saves a snapshot, replacing the previous one
    async fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError>;
}
