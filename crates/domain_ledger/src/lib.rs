//! Supply Ledger Domain
//!
//! The ledger is the transaction history of the business: one `Supply`
//! record per customer per delivery day, capturing jars/thermos delivered
//! and returned plus any payment collected. Records are append-only and
//! immutable; holdings and dues are recomputed from the full history on
//! demand rather than kept as running balances.

pub mod draft;
pub mod ledger;
pub mod supply;

pub use draft::SupplyDraft;
pub use ledger::SupplyLedger;
pub use supply::{Holdings, Supply, UnitCount};
