//! The application service
//!
//! Single controlling context for the whole system: it owns both
//! collections behind one write lock, dispatches every operation, and
//! persists a snapshot after each successful mutation.
//!
//! Mutations follow a save-then-swap discipline. The next version of a
//! collection is computed first, saved through the store port, and only
//! then swapped in; a store failure therefore leaves the in-memory state
//! exactly as it was.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use core_kernel::{BillingMonth, CustomerId, Money};
use domain_billing::{area_report, monthly_bill, AreaReportRow, MonthlyBill};
use domain_directory::{Customer, CustomerDirectory, CustomerDraft};
use domain_ledger::{Holdings, Supply, SupplyDraft, SupplyLedger};
use infra_store::{Snapshot, SnapshotStore};

#[derive(Debug, Default)]
struct State {
    directory: CustomerDirectory,
    ledger: SupplyLedger,
}

/// Owns the customer directory and supply ledger, serializing all writes
pub struct AquaService {
    state: RwLock<State>,
    store: Arc<dyn SnapshotStore>,
}

impl AquaService {
    /// Opens the service, restoring both collections from the store
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` when the snapshot cannot be loaded.
    pub async fn open(
        store: Arc<dyn SnapshotStore>,
        config: &ServiceConfig,
    ) -> Result<Self, ServiceError> {
        let (directory, ledger) = store.load().await?.restore();
        tracing::info!(
            business = %config.business_name,
            customers = directory.len(),
            supplies = ledger.len(),
            "service opened"
        );
        Ok(Self {
            state: RwLock::new(State { directory, ledger }),
            store,
        })
    }

    /// Adds a customer and persists the new state
    ///
    /// # Errors
    ///
    /// Validation and store errors leave the collections untouched.
    pub async fn add_customer(&self, draft: &CustomerDraft) -> Result<Customer, ServiceError> {
        let mut state = self.state.write().await;
        let (directory, customer) = state.directory.add(draft)?;
        self.store
            .save(&Snapshot::capture(&directory, &state.ledger))
            .await?;
        state.directory = directory;
        Ok(customer)
    }

    /// Updates a customer and persists the new state
    ///
    /// # Errors
    ///
    /// Validation, not-found, and store errors leave the collections untouched.
    pub async fn update_customer(
        &self,
        id: CustomerId,
        draft: &CustomerDraft,
    ) -> Result<Customer, ServiceError> {
        let mut state = self.state.write().await;
        let (directory, customer) = state.directory.update(id, draft)?;
        self.store
            .save(&Snapshot::capture(&directory, &state.ledger))
            .await?;
        state.directory = directory;
        Ok(customer)
    }

    /// Removes a customer and persists the new state; a no-op for absent ids
    ///
    /// The customer's supply history stays in the ledger.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` when the snapshot cannot be saved.
    pub async fn remove_customer(&self, id: CustomerId) -> Result<(), ServiceError> {
        let mut state = self.state.write().await;
        let directory = state.directory.remove(id);
        self.store
            .save(&Snapshot::capture(&directory, &state.ledger))
            .await?;
        state.directory = directory;
        Ok(())
    }

    /// Records a supply sheet and persists the new state
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` when the snapshot cannot be saved;
    /// nothing is appended in that case.
    pub async fn record_supplies(
        &self,
        date: NaiveDate,
        entries: &[(CustomerId, SupplyDraft)],
    ) -> Result<Vec<Supply>, ServiceError> {
        let mut state = self.state.write().await;
        for (customer_id, _) in entries {
            if !state.directory.contains(*customer_id) {
                tracing::warn!(%customer_id, "supply entry for customer not in directory");
            }
        }
        let (ledger, recorded) = state.ledger.record_batch(date, entries);
        self.store
            .save(&Snapshot::capture(&state.directory, &ledger))
            .await?;
        state.ledger = ledger;
        Ok(recorded)
    }

    /// All customers in directory order
    pub async fn customers(&self) -> Vec<Customer> {
        self.state.read().await.directory.customers().to_vec()
    }

    /// Looks up a customer by id
    pub async fn customer(&self, id: CustomerId) -> Option<Customer> {
        self.state.read().await.directory.find(id).cloned()
    }

    /// Distinct areas in first-seen directory order
    pub async fn areas(&self) -> Vec<String> {
        self.state.read().await.directory.areas()
    }

    /// Net units currently with the customer
    pub async fn holdings(&self, customer_id: CustomerId) -> Holdings {
        self.state.read().await.ledger.holdings_for(customer_id)
    }

    /// Lifetime amount the customer owes
    pub async fn dues(&self, customer_id: CustomerId) -> Money {
        let state = self.state.read().await;
        if !state.directory.contains(customer_id) {
            tracing::warn!(%customer_id, "dues requested for customer not in directory");
        }
        state.ledger.dues_for(customer_id, &state.directory)
    }

    /// Bill for one customer and month; `None` for an unknown customer
    pub async fn monthly_bill(
        &self,
        customer_id: CustomerId,
        month: BillingMonth,
    ) -> Option<MonthlyBill> {
        let state = self.state.read().await;
        let bill = monthly_bill(customer_id, month, &state.directory, &state.ledger);
        if bill.is_none() {
            tracing::warn!(%customer_id, %month, "bill requested for customer not in directory");
        }
        bill
    }

    /// Holdings and dues for every customer in the area, in directory order
    pub async fn area_report(&self, area: &str) -> Vec<AreaReportRow> {
        let state = self.state.read().await;
        area_report(area, &state.directory, &state.ledger)
    }
}
