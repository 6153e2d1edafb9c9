//! Application Service
//!
//! Wires the domain crates together behind a single async facade: one
//! `AquaService` owns the customer directory and the supply ledger,
//! serializes writes through a lock, and persists a snapshot through the
//! store port after every successful mutation.

pub mod config;
pub mod error;
pub mod service;
pub mod telemetry;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use service::AquaService;
pub use telemetry::init_tracing;
