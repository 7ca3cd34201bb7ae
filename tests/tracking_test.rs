use kitchen_storefront::catalog::{Catalog, ItemConfiguration};
use kitchen_storefront::config::StorefrontConfig;
use kitchen_storefront::framework::mock::create_mock_client;
use kitchen_storefront::clients::OrderClient;
use kitchen_storefront::lifecycle::Storefront;
use kitchen_storefront::model::{DeliveryStage, Order, OrderCreate, OrderId};
use kitchen_storefront::storage::MemoryStore;
use kitchen_storefront::tracking::{spawn_tracker, TrackingSettings};
use std::sync::Arc;
use std::time::Duration;

/// Full storefront on a paused clock: the tracker walks every stage and records each one
/// on the order.
#[tokio::test(start_paused = true)]
async fn test_tracker_walks_all_stages() {
    let mut storefront = Storefront::new(
        Catalog::builtin(),
        Arc::new(MemoryStore::new()),
        &StorefrontConfig::default(),
    );
    let cart = storefront.open_cart().await.unwrap();
    storefront
        .add_to_cart(cart, "suya", &ItemConfiguration::new())
        .await
        .unwrap();
    let order = storefront
        .place_order(OrderCreate::new(cart, "123 Main Street"))
        .await
        .unwrap();

    let tracker = storefront.track(order.id);
    let mut snapshots = tracker.subscribe();
    let first = snapshots.borrow_and_update().clone();
    assert_eq!(first.stage, DeliveryStage::Accepted);
    assert_eq!(first.minutes_remaining, 20);
    assert_eq!(first.label, "Order Accepted");

    let mut stages = vec![first.stage];
    let mut minutes = vec![first.minutes_remaining];
    while snapshots.changed().await.is_ok() {
        let snapshot = snapshots.borrow_and_update().clone();
        stages.push(snapshot.stage);
        minutes.push(snapshot.minutes_remaining);
    }
    assert_eq!(stages, DeliveryStage::ALL.to_vec());
    assert_eq!(minutes, vec![20, 15, 10, 0]);

    let last = tracker.current();
    assert!(last.completed);
    assert_eq!(last.stage_index, 3);
    tracker.finished().await;

    let stored = storefront.order(order.id).await.unwrap();
    assert_eq!(stored.stage, DeliveryStage::Delivered);

    storefront.shutdown().await.unwrap();
}

/// The minute clock alone can drive the stages when it runs out first.
#[tokio::test(start_paused = true)]
async fn test_countdown_advances_stage_at_zero() {
    let (orders, receiver) = create_mock_client::<Order>(4);
    // Stage records fail fast and are only logged.
    drop(receiver);

    let settings = TrackingSettings {
        stage_interval: Duration::from_secs(600),
        minute_interval: Duration::from_secs(60),
        initial_minutes: 2,
    };
    let tracker = spawn_tracker(OrderId(7), settings, OrderClient::new(orders));
    let mut snapshots = tracker.subscribe();

    let first = snapshots.borrow_and_update().clone();
    let mut seen = vec![(first.stage, first.minutes_remaining)];
    while snapshots.changed().await.is_ok() {
        let s = snapshots.borrow_and_update().clone();
        seen.push((s.stage, s.minutes_remaining));
    }
    assert_eq!(
        seen,
        vec![
            (DeliveryStage::Accepted, 2),
            (DeliveryStage::Accepted, 1),
            (DeliveryStage::Cooking, 2),
            (DeliveryStage::Cooking, 1),
            (DeliveryStage::OnTheWay, 2),
            (DeliveryStage::OnTheWay, 1),
            (DeliveryStage::Delivered, 0),
        ]
    );
    assert_eq!(tracker.current().order_id, OrderId(7));
}

#[tokio::test(start_paused = true)]
async fn test_aborted_tracker_stops_publishing() {
    let (orders, receiver) = create_mock_client::<Order>(4);
    drop(receiver);

    let tracker = spawn_tracker(
        OrderId(1),
        TrackingSettings::default(),
        OrderClient::new(orders),
    );
    let snapshots = tracker.subscribe();
    tracker.abort();
    tracker.finished().await;

    tokio::time::advance(Duration::from_secs(120)).await;
    assert_eq!(snapshots.borrow().stage, DeliveryStage::Accepted);
    assert_eq!(snapshots.borrow().minutes_remaining, 20);
}
