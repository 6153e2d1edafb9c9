//! Customer Directory Domain
//!
//! This crate owns the customer records of the delivery business. Customers
//! are created from form drafts, validated, and held in a `CustomerDirectory`
//! whose operations are pure: every mutation returns a new collection and the
//! caller decides what to do with it, which keeps the write path trivially
//! testable and lets a controlling context swap collections atomically.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_directory::{CustomerDirectory, CustomerDraft};
//!
//! let directory = CustomerDirectory::new();
//! let draft = CustomerDraft { name: "Ravi Kumar".into(), .. };
//! let (directory, customer) = directory.add(&draft)?;
//! ```

pub mod customer;
pub mod directory;
pub mod draft;
pub mod error;
pub mod validation;

pub use customer::{Customer, ServicePreferences, ServiceRates};
pub use directory::CustomerDirectory;
pub use draft::CustomerDraft;
pub use error::DirectoryError;
pub use validation::{CustomerValidator, ValidationResult};
