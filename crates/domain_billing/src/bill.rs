//! Monthly bill derivation

use serde::{Deserialize, Serialize};

use core_kernel::{BillingMonth, CustomerId, Money};
use domain_directory::{Customer, CustomerDirectory};
use domain_ledger::{Supply, SupplyLedger};

/// A customer's bill for one calendar month
///
/// A month with no supplies is a valid bill: zero amount, zero paid, zero
/// balance, empty supply list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBill {
    /// The billed customer
    pub customer: Customer,
    /// The billed month
    pub month: BillingMonth,
    /// The customer's supplies in that month, in ledger order
    pub supplies: Vec<Supply>,
    /// Sum of billable amounts over the month's supplies
    pub total_amount: Money,
    /// Sum of payments over the month's supplies
    pub total_paid: Money,
    /// Amount still owed for the month (may be negative on overpayment)
    pub balance: Money,
}

/// Derives a customer's bill for the given month
///
/// Returns `None` when the customer id does not resolve — nothing to
/// display, not an error.
pub fn monthly_bill(
    customer_id: CustomerId,
    month: BillingMonth,
    directory: &CustomerDirectory,
    ledger: &SupplyLedger,
) -> Option<MonthlyBill> {
    let customer = directory.find(customer_id)?.clone();

    let supplies: Vec<Supply> = ledger
        .supplies_for(customer_id)
        .filter(|s| month.contains(s.date))
        .cloned()
        .collect();

    let total_amount: Money = supplies
        .iter()
        .map(|s| s.billable_amount(&customer.rates))
        .sum();
    let total_paid: Money = supplies.iter().map(|s| s.payment).sum();
    let balance = total_amount - total_paid;

    tracing::trace!(
        %customer_id,
        %month,
        supplies = supplies.len(),
        %total_amount,
        "monthly bill derived"
    );

    Some(MonthlyBill {
        customer,
        month,
        supplies,
        total_amount,
        total_paid,
        balance,
    })
}
