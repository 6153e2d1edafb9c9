//! Area due reports

use serde::{Deserialize, Serialize};

use domain_directory::{Customer, CustomerDirectory};
use domain_ledger::{Holdings, SupplyLedger};
use core_kernel::Money;

/// One customer's line in an area report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaReportRow {
    pub customer: Customer,
    /// Lifetime net units with the customer
    pub holdings: Holdings,
    /// Lifetime amount owed
    pub dues: Money,
}

/// Snapshots every customer in an area with current holdings and dues
///
/// Rows come back in directory order; customers from other areas are
/// omitted. Holdings and dues are lifetime figures, not month-scoped.
pub fn area_report(
    area: &str,
    directory: &CustomerDirectory,
    ledger: &SupplyLedger,
) -> Vec<AreaReportRow> {
    directory
        .in_area(area)
        .map(|customer| AreaReportRow {
            customer: customer.clone(),
            holdings: ledger.holdings_for(customer.id),
            dues: ledger.dues_for(customer.id, directory),
        })
        .collect()
}
