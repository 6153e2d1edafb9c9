//! Core Kernel - Foundational types for the aqua delivery system
//!
//! This crate provides the building blocks used across all domain modules:
//! - Rupee money values with precise decimal arithmetic
//! - Billing month handling for month-scoped queries
//! - Strongly-typed entity identifiers
//! - Lenient numeric parsing for form-sourced input

pub mod error;
pub mod identifiers;
pub mod money;
pub mod parse;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{CustomerId, SupplyId};
pub use money::Money;
pub use temporal::{BillingMonth, TemporalError};
