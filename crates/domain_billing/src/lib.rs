//! Billing Domain - Monthly Bills and Area Reports
//!
//! A pure read path over the customer directory and supply ledger:
//!
//! - `monthly_bill` derives one customer's bill for a calendar month
//! - `area_report` snapshots every customer in an area with their current
//!   holdings and lifetime dues
//!
//! Billing charges deliveries only. Returns adjust holdings; payments reduce
//! the balance, never the billed amount.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::monthly_bill;
//!
//! let month = "2025-03".parse()?;
//! if let Some(bill) = monthly_bill(customer_id, month, &directory, &ledger) {
//!     println!("{} owes {}", bill.customer.name, bill.balance);
//! }
//! ```

pub mod bill;
pub mod report;

pub use bill::{monthly_bill, MonthlyBill};
pub use report::{area_report, AreaReportRow};
