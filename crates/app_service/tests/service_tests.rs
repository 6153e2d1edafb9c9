//! End-to-end tests for the application service

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal_macros::dec;

use app_service::{AquaService, ServiceConfig, ServiceError};
use infra_store::{MemoryStore, Snapshot, SnapshotStore, StoreError};
use test_utils::{
    assert_holdings, assert_money_zero, assert_rupees, CustomerDraftBuilder, StringFixtures,
    SupplyDraftBuilder, TemporalFixtures,
};

async fn open_service() -> (AquaService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let service = AquaService::open(store.clone(), &ServiceConfig::default())
        .await
        .expect("memory store always loads");
    (service, store)
}

/// Store that loads fine but refuses every save
struct ReadOnlyStore;

#[async_trait]
impl SnapshotStore for ReadOnlyStore {
    async fn load(&self) -> Result<Snapshot, StoreError> {
        Ok(Snapshot::default())
    }

    async fn save(&self, _snapshot: &Snapshot) -> Result<(), StoreError> {
        Err(StoreError::unavailable("read-only"))
    }
}

#[tokio::test]
async fn test_opens_empty_from_fresh_store() {
    let (service, _) = open_service().await;
    assert!(service.customers().await.is_empty());
    assert!(service.areas().await.is_empty());
}

#[tokio::test]
async fn test_add_record_and_bill_end_to_end() {
    let (service, _) = open_service().await;

    let customer = service
        .add_customer(&CustomerDraftBuilder::new().build())
        .await
        .unwrap();

    service
        .record_supplies(
            TemporalFixtures::sheet_date(),
            &[(
                customer.id,
                SupplyDraftBuilder::new().delivered(10, 0).paying("200").build(),
            )],
        )
        .await
        .unwrap();
    service
        .record_supplies(
            TemporalFixtures::later_in_month(),
            &[(
                customer.id,
                SupplyDraftBuilder::new().delivered(6, 0).paying("100").build(),
            )],
        )
        .await
        .unwrap();

    let bill = service
        .monthly_bill(customer.id, TemporalFixtures::billing_month())
        .await
        .expect("customer exists");

    assert_rupees(&bill.total_amount, dec!(800));
    assert_rupees(&bill.total_paid, dec!(300));
    assert_rupees(&bill.balance, dec!(500));
}

#[tokio::test]
async fn test_state_survives_reopen_from_same_store() {
    let store = Arc::new(MemoryStore::new());
    let customer = {
        let service = AquaService::open(store.clone(), &ServiceConfig::default())
            .await
            .unwrap();
        let customer = service
            .add_customer(&CustomerDraftBuilder::new().build())
            .await
            .unwrap();
        service
            .record_supplies(
                TemporalFixtures::sheet_date(),
                &[(customer.id, SupplyDraftBuilder::new().delivered(3, 0).build())],
            )
            .await
            .unwrap();
        customer
    };

    let reopened = AquaService::open(store, &ServiceConfig::default())
        .await
        .unwrap();
    assert_eq!(reopened.customers().await.len(), 1);
    assert_holdings(&reopened.holdings(customer.id).await, 3, 0);
    assert_rupees(&reopened.dues(customer.id).await, dec!(150));
}

#[tokio::test]
async fn test_update_changes_future_pricing() {
    let (service, _) = open_service().await;
    let customer = service
        .add_customer(&CustomerDraftBuilder::new().build())
        .await
        .unwrap();
    service
        .record_supplies(
            TemporalFixtures::sheet_date(),
            &[(customer.id, SupplyDraftBuilder::new().delivered(10, 0).build())],
        )
        .await
        .unwrap();

    service
        .update_customer(
            customer.id,
            &CustomerDraftBuilder::new().with_jar_rate("60").build(),
        )
        .await
        .unwrap();

    assert_rupees(&service.dues(customer.id).await, dec!(600));
}

#[tokio::test]
async fn test_remove_keeps_history_but_zeroes_dues() {
    let (service, _) = open_service().await;
    let customer = service
        .add_customer(&CustomerDraftBuilder::new().build())
        .await
        .unwrap();
    service
        .record_supplies(
            TemporalFixtures::sheet_date(),
            &[(customer.id, SupplyDraftBuilder::new().delivered(5, 0).build())],
        )
        .await
        .unwrap();

    service.remove_customer(customer.id).await.unwrap();

    assert!(service.customers().await.is_empty());
    // History remains for holdings; dues lose their rates with the customer
    assert_holdings(&service.holdings(customer.id).await, 5, 0);
    assert_money_zero(&service.dues(customer.id).await);
    assert!(service
        .monthly_bill(customer.id, TemporalFixtures::billing_month())
        .await
        .is_none());
}

#[tokio::test]
async fn test_area_report_through_service() {
    let (service, _) = open_service().await;
    let ravi = service
        .add_customer(&CustomerDraftBuilder::new().with_name("Ravi").build())
        .await
        .unwrap();
    service
        .add_customer(
            &CustomerDraftBuilder::new()
                .with_name("Sita")
                .with_area(StringFixtures::other_area())
                .build(),
        )
        .await
        .unwrap();

    service
        .record_supplies(
            TemporalFixtures::sheet_date(),
            &[(ravi.id, SupplyDraftBuilder::new().delivered(4, 0).paying("50").build())],
        )
        .await
        .unwrap();

    let rows = service.area_report(StringFixtures::area()).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].customer.id, ravi.id);
    assert_rupees(&rows[0].dues, dec!(150));

    assert_eq!(
        service.areas().await,
        vec![
            StringFixtures::area().to_string(),
            StringFixtures::other_area().to_string()
        ]
    );
}

#[tokio::test]
async fn test_invalid_draft_is_rejected_and_not_persisted() {
    let (service, store) = open_service().await;

    let err = service
        .add_customer(&CustomerDraftBuilder::new().with_name("").build())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Directory(_)));

    assert!(service.customers().await.is_empty());
    assert!(store.load().await.unwrap().customers.is_empty());
}

#[tokio::test]
async fn test_failed_save_leaves_state_untouched() {
    let service = AquaService::open(Arc::new(ReadOnlyStore), &ServiceConfig::default())
        .await
        .unwrap();

    let err = service
        .add_customer(&CustomerDraftBuilder::new().build())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));
    assert!(service.customers().await.is_empty());

    let err = service
        .record_supplies(
            TemporalFixtures::sheet_date(),
            &[(
                test_utils::IdFixtures::customer_id(),
                SupplyDraftBuilder::new().delivered(1, 0).build(),
            )],
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));
}
