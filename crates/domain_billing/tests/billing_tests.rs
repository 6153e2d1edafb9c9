//! Comprehensive tests for domain_billing

use rust_decimal_macros::dec;

use core_kernel::{BillingMonth, CustomerId, Money};
use domain_billing::{area_report, monthly_bill};
use domain_ledger::SupplyLedger;
use test_utils::{
    assert_holdings, assert_money_negative, assert_money_zero, assert_rupees, seed_directory,
    CustomerDraftBuilder, MoneyFixtures, SupplyDraftBuilder, TemporalFixtures,
};

// ============================================================================
// Monthly Bill Tests
// ============================================================================

mod bill_tests {
    use super::*;

    #[test]
    fn test_bill_for_month_of_jar_deliveries() {
        let (directory, customers) = seed_directory(&[CustomerDraftBuilder::new().build()]);
        let id = customers[0].id;

        let (ledger, _) = SupplyLedger::new().record_batch(
            TemporalFixtures::sheet_date(),
            &[(id, SupplyDraftBuilder::new().delivered(10, 0).paying("200").build())],
        );
        let (ledger, _) = ledger.record_batch(
            TemporalFixtures::later_in_month(),
            &[(id, SupplyDraftBuilder::new().delivered(6, 0).paying("100").build())],
        );

        let bill = monthly_bill(id, TemporalFixtures::billing_month(), &directory, &ledger)
            .expect("customer is in the directory");

        assert_rupees(&bill.total_amount, dec!(800));
        assert_rupees(&bill.total_paid, dec!(300));
        assert_rupees(&bill.balance, dec!(500));
        assert_eq!(bill.supplies.len(), 2);
    }

    #[test]
    fn test_bill_scopes_to_requested_month() {
        let (directory, customers) = seed_directory(&[CustomerDraftBuilder::new().build()]);
        let id = customers[0].id;

        let (ledger, _) = SupplyLedger::new().record_batch(
            TemporalFixtures::sheet_date(),
            &[(id, SupplyDraftBuilder::new().delivered(10, 0).build())],
        );
        let (ledger, _) = ledger.record_batch(
            TemporalFixtures::next_month_date(),
            &[(id, SupplyDraftBuilder::new().delivered(99, 0).build())],
        );

        let march = monthly_bill(id, TemporalFixtures::billing_month(), &directory, &ledger).unwrap();
        assert_rupees(&march.total_amount, dec!(500));
        assert_eq!(march.supplies.len(), 1);

        let april = monthly_bill(id, BillingMonth::new(2025, 4).unwrap(), &directory, &ledger).unwrap();
        assert_rupees(&april.total_amount, dec!(4950));
    }

    #[test]
    fn test_bill_prices_both_services_at_their_own_rates() {
        let (directory, customers) = seed_directory(&[CustomerDraftBuilder::new()
            .taking_both("50", "30")
            .build()]);
        let id = customers[0].id;

        let (ledger, _) = SupplyLedger::new().record_batch(
            TemporalFixtures::sheet_date(),
            &[(id, SupplyDraftBuilder::new().delivered(4, 3).build())],
        );

        let bill = monthly_bill(id, TemporalFixtures::billing_month(), &directory, &ledger).unwrap();

        // 4 * 50 + 3 * 30
        assert_rupees(&bill.total_amount, dec!(290));
    }

    #[test]
    fn test_bill_for_empty_month_is_all_zeros() {
        let (directory, customers) = seed_directory(&[CustomerDraftBuilder::new().build()]);

        let bill = monthly_bill(
            customers[0].id,
            TemporalFixtures::empty_month(),
            &directory,
            &SupplyLedger::new(),
        )
        .unwrap();

        assert_money_zero(&bill.total_amount);
        assert_money_zero(&bill.total_paid);
        assert_money_zero(&bill.balance);
        assert!(bill.supplies.is_empty());
    }

    #[test]
    fn test_bill_for_unknown_customer_is_none() {
        let (directory, _) = seed_directory(&[CustomerDraftBuilder::new().build()]);
        let bill = monthly_bill(
            CustomerId::new(),
            TemporalFixtures::billing_month(),
            &directory,
            &SupplyLedger::new(),
        );
        assert!(bill.is_none());
    }

    #[test]
    fn test_bill_uses_current_rates_after_update() {
        let (directory, customers) = seed_directory(&[CustomerDraftBuilder::new().build()]);
        let id = customers[0].id;

        let (ledger, _) = SupplyLedger::new().record_batch(
            TemporalFixtures::sheet_date(),
            &[(id, SupplyDraftBuilder::new().delivered(10, 0).build())],
        );

        // Raise the rate; past supplies are re-priced at the new rate
        let (directory, _) = directory
            .update(id, &CustomerDraftBuilder::new().with_jar_rate("60").build())
            .unwrap();

        let bill = monthly_bill(id, TemporalFixtures::billing_month(), &directory, &ledger).unwrap();
        assert_rupees(&bill.total_amount, dec!(600));
    }

    #[test]
    fn test_overpayment_leaves_negative_balance() {
        let (directory, customers) = seed_directory(&[CustomerDraftBuilder::new().build()]);
        let id = customers[0].id;

        let (ledger, _) = SupplyLedger::new().record_batch(
            TemporalFixtures::sheet_date(),
            &[(id, SupplyDraftBuilder::new().delivered(2, 0).paying("500").build())],
        );

        let bill = monthly_bill(id, TemporalFixtures::billing_month(), &directory, &ledger).unwrap();
        assert_money_negative(&bill.balance);
        assert_rupees(&bill.balance, dec!(-400));
    }
}

// ============================================================================
// Area Report Tests
// ============================================================================

mod report_tests {
    use super::*;
    use test_utils::StringFixtures;

    #[test]
    fn test_report_lists_area_customers_in_directory_order() {
        let (directory, customers) = seed_directory(&[
            CustomerDraftBuilder::new().with_name("Ravi").build(),
            CustomerDraftBuilder::new()
                .with_name("Sita")
                .with_area(StringFixtures::other_area())
                .build(),
            CustomerDraftBuilder::new().with_name("Amit").build(),
        ]);

        let rows = area_report(StringFixtures::area(), &directory, &SupplyLedger::new());

        let ids: Vec<_> = rows.iter().map(|r| r.customer.id).collect();
        assert_eq!(ids, vec![customers[0].id, customers[2].id]);
    }

    #[test]
    fn test_report_carries_lifetime_holdings_and_dues() {
        let (directory, customers) = seed_directory(&[CustomerDraftBuilder::new().build()]);
        let id = customers[0].id;

        // Two months of history; the report does not scope to a month
        let (ledger, _) = SupplyLedger::new().record_batch(
            TemporalFixtures::sheet_date(),
            &[(id, SupplyDraftBuilder::new().delivered(10, 0).returned(3, 0).paying("100").build())],
        );
        let (ledger, _) = ledger.record_batch(
            TemporalFixtures::next_month_date(),
            &[(id, SupplyDraftBuilder::new().delivered(5, 0).returned(6, 0).build())],
        );

        let rows = area_report(StringFixtures::area(), &directory, &ledger);
        assert_eq!(rows.len(), 1);
        assert_holdings(&rows[0].holdings, 6, 0);
        // 15 * 50 - 100
        assert_rupees(&rows[0].dues, dec!(650));
    }

    #[test]
    fn test_report_row_with_no_supplies_is_zeroed() {
        let (directory, _) = seed_directory(&[CustomerDraftBuilder::new().build()]);

        let rows = area_report(StringFixtures::area(), &directory, &SupplyLedger::new());
        assert_eq!(rows.len(), 1);
        assert_holdings(&rows[0].holdings, 0, 0);
        assert_eq!(rows[0].dues, MoneyFixtures::zero());
    }

    #[test]
    fn test_report_for_area_without_customers_is_empty() {
        let (directory, _) = seed_directory(&[CustomerDraftBuilder::new().build()]);
        assert!(area_report("Nowhere", &directory, &SupplyLedger::new()).is_empty());
    }
}

// ============================================================================
// Parsing-at-the-edges Tests
// ============================================================================

mod lenient_input_tests {
    use super::*;

    #[test]
    fn test_junk_sheet_rows_bill_as_zero() {
        let (directory, customers) = seed_directory(&[CustomerDraftBuilder::new().build()]);
        let id = customers[0].id;

        let (ledger, _) = SupplyLedger::new().record_batch(
            TemporalFixtures::sheet_date(),
            &[(
                id,
                SupplyDraftBuilder::new()
                    .with_delivered_jars_text("ten")
                    .paying("n/a")
                    .build(),
            )],
        );

        let bill = monthly_bill(id, TemporalFixtures::billing_month(), &directory, &ledger).unwrap();
        assert_money_zero(&bill.total_amount);
        assert_money_zero(&bill.total_paid);
        assert_eq!(bill.supplies.len(), 1);
    }

    #[test]
    fn test_junk_rate_bills_deliveries_at_zero() {
        let (directory, customers) =
            seed_directory(&[CustomerDraftBuilder::new().with_jar_rate("fifty").build()]);
        let id = customers[0].id;

        let (ledger, _) = SupplyLedger::new().record_batch(
            TemporalFixtures::sheet_date(),
            &[(id, SupplyDraftBuilder::new().delivered(10, 0).paying("100").build())],
        );

        let bill = monthly_bill(id, TemporalFixtures::billing_month(), &directory, &ledger).unwrap();
        assert_money_zero(&bill.total_amount);
        assert_rupees(&bill.balance, dec!(-100));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::supply_draft_strategy;

    proptest! {
        // Balance is always amount minus paid, whatever the sheet contained.
        #[test]
        fn balance_is_amount_minus_paid(
            rows in proptest::collection::vec(supply_draft_strategy(), 0..10)
        ) {
            let (directory, customers) = seed_directory(&[CustomerDraftBuilder::new().build()]);
            let id = customers[0].id;

            let entries: Vec<_> = rows.into_iter().map(|row| (id, row)).collect();
            let (ledger, _) =
                SupplyLedger::new().record_batch(TemporalFixtures::sheet_date(), &entries);

            let bill = monthly_bill(id, TemporalFixtures::billing_month(), &directory, &ledger)
                .expect("customer is in the directory");
            prop_assert_eq!(bill.balance, bill.total_amount - bill.total_paid);
            prop_assert_eq!(bill.supplies.len(), entries.len());
        }

        // The billed amount never goes down when more rows are added.
        #[test]
        fn billed_amount_is_monotone_in_supplies(
            rows in proptest::collection::vec(supply_draft_strategy(), 1..10)
        ) {
            let (directory, customers) = seed_directory(&[CustomerDraftBuilder::new().build()]);
            let id = customers[0].id;

            let mut ledger = SupplyLedger::new();
            let mut last = Money::zero();
            for row in rows {
                let (next, _) =
                    ledger.record_batch(TemporalFixtures::sheet_date(), &[(id, row)]);
                ledger = next;
                let bill =
                    monthly_bill(id, TemporalFixtures::billing_month(), &directory, &ledger)
                        .expect("customer is in the directory");
                prop_assert!(bill.total_amount >= last);
                last = bill.total_amount;
            }
        }
    }
}

// ============================================================================
// Cross-check: bill balances vs lifetime dues
// ============================================================================

#[test]
fn test_lifetime_dues_equal_sum_of_monthly_balances() {
    let (directory, customers) = seed_directory(&[CustomerDraftBuilder::new().build()]);
    let id = customers[0].id;

    let (ledger, _) = SupplyLedger::new().record_batch(
        TemporalFixtures::sheet_date(),
        &[(id, SupplyDraftBuilder::new().delivered(10, 0).paying("200").build())],
    );
    let (ledger, _) = ledger.record_batch(
        TemporalFixtures::next_month_date(),
        &[(id, SupplyDraftBuilder::new().delivered(4, 0).paying("50").build())],
    );

    let march = monthly_bill(id, BillingMonth::new(2025, 3).unwrap(), &directory, &ledger).unwrap();
    let april = monthly_bill(id, BillingMonth::new(2025, 4).unwrap(), &directory, &ledger).unwrap();

    let dues: Money = ledger.dues_for(id, &directory);
    assert_eq!(dues, march.balance + april.balance);
}
