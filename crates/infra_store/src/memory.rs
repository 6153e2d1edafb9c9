//! In-memory snapshot store
//!
//! Holds the snapshot behind an async RwLock. This is the adapter the
//! single-process deployment uses, and it doubles as the test double for
//! anything that takes a `SnapshotStore`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::port::{Snapshot, SnapshotStore};

/// In-memory implementation of `SnapshotStore`
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RwLock<Snapshot>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a snapshot
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self) -> Result<Snapshot, StoreError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let mut guard = self.snapshot.write().await;
        *guard = snapshot.clone();
        tracing::debug!(
            customers = snapshot.customers.len(),
            supplies = snapshot.supplies.len(),
            "snapshot saved"
        );
        Ok(())
    }
}
