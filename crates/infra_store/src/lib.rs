//! Snapshot Storage Infrastructure
//!
//! The computation core is storage-agnostic: it operates on collections the
//! caller owns. This crate defines the small collaborator that loads and
//! saves those collections as one snapshot, plus an in-memory adapter.
//!
//! Durable backends are out of scope for the core; anything that can hold a
//! serialized snapshot can implement `SnapshotStore`.

pub mod error;
pub mod memory;
pub mod port;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use port::{Snapshot, SnapshotStore};
