use kitchen_storefront::catalog::{Catalog, CatalogError, ItemConfiguration};
use kitchen_storefront::config::StorefrontConfig;
use kitchen_storefront::error::StorefrontError;
use kitchen_storefront::lifecycle::Storefront;
use kitchen_storefront::model::{DeliveryStage, OrderCreate, PaymentMethod};
use kitchen_storefront::order_actor::OrderError;
use kitchen_storefront::storage::MemoryStore;
use std::sync::Arc;
use std::time::Duration;

fn config() -> StorefrontConfig {
    StorefrontConfig {
        processing_delay: Duration::ZERO,
        ..Default::default()
    }
}

fn storefront() -> Storefront {
    Storefront::new(Catalog::builtin(), Arc::new(MemoryStore::new()), &config())
}

#[tokio::test]
async fn test_browse_configure_and_checkout() {
    let storefront = storefront();

    let page = storefront.catalog.category_page("rice").unwrap();
    assert_eq!(page.title, "Rice Dishes");
    assert_eq!(page.items[0].id, "jollof-rice");

    let cart = storefront.open_cart().await.unwrap();
    let jollof = ItemConfiguration::new()
        .size("large")
        .addon("plantain")
        .quantity(2);
    let summary = storefront.add_to_cart(cart, "jollof-rice", &jollof).await.unwrap();
    assert_eq!(summary.lines[0].id, "jollof-rice-large-plantain");
    assert_eq!(summary.lines[0].price, 21.98);
    assert_eq!(summary.subtotal, 43.96);

    let order = storefront
        .place_order(
            OrderCreate::new(cart, "123 Main Street, Apt 4B")
                .with_payment(PaymentMethod::ApplePay)
                .with_promo_code("SAVE10"),
        )
        .await
        .unwrap();
    let quote = order.quote.unwrap();
    assert_eq!(quote.discount, 4.4);
    assert_eq!(quote.total, 44.05);
    assert_eq!(order.stage, DeliveryStage::Accepted);
    assert_eq!(order.lines.len(), 1);

    let after = storefront.carts.summary(cart).await.unwrap();
    assert!(after.is_empty());

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_without_promo() {
    let storefront = storefront();
    let cart = storefront.open_cart().await.unwrap();
    storefront
        .add_to_cart(cart, "jollof-rice", &ItemConfiguration::new().size("large").addon("plantain").quantity(2))
        .await
        .unwrap();

    let order = storefront
        .place_order(OrderCreate::new(cart, "home").with_promo_code("save10"))
        .await
        .unwrap();
    let quote = order.quote.unwrap();
    assert_eq!(quote.discount, 0.0);
    assert_eq!(quote.total, 48.45);
}

#[tokio::test]
async fn test_empty_cart_checkout_is_rejected() {
    let storefront = storefront();
    let cart = storefront.open_cart().await.unwrap();

    let err = storefront
        .place_order(OrderCreate::new(cart, "home"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorefrontError::Order(OrderError::EmptyCart)));
    assert_eq!(err.to_string(), "Your cart is empty");

    // Still usable afterwards.
    let summary = storefront
        .add_to_cart(cart, "suya", &ItemConfiguration::new())
        .await
        .unwrap();
    assert_eq!(summary.total_items, 1);
}

/// Lines added while payment is processing are not part of the order and stay in the
/// cart.
#[tokio::test(start_paused = true)]
async fn test_lines_added_during_processing_stay_in_cart() {
    let storefront = Storefront::new(
        Catalog::builtin(),
        Arc::new(MemoryStore::new()),
        &StorefrontConfig {
            processing_delay: Duration::from_millis(200),
            ..Default::default()
        },
    );
    let cart = storefront.open_cart().await.unwrap();
    let jollof = ItemConfiguration::new().size("large").addon("plantain");
    storefront.add_to_cart(cart, "jollof-rice", &jollof).await.unwrap();

    let orders = storefront.orders.clone();
    let checkout = tokio::spawn(async move {
        orders.place_order(OrderCreate::new(cart, "home")).await
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    storefront
        .add_to_cart(cart, "suya", &ItemConfiguration::new())
        .await
        .unwrap();
    let during = storefront
        .add_to_cart(cart, "jollof-rice", &jollof)
        .await
        .unwrap();
    assert_eq!(during.lines.len(), 2);
    assert_eq!(during.total_items, 3);

    let order_id = checkout.await.unwrap().unwrap();
    let order = storefront.order(order_id).await.unwrap();
    let ordered: Vec<(&str, u32)> = order
        .lines
        .iter()
        .map(|l| (l.id.as_str(), l.quantity))
        .collect();
    assert_eq!(ordered, vec![("jollof-rice-large-plantain", 1)]);

    let after = storefront.carts.summary(cart).await.unwrap();
    let remaining: Vec<(&str, u32)> = after
        .lines
        .iter()
        .map(|l| (l.id.as_str(), l.quantity))
        .collect();
    assert_eq!(
        remaining,
        vec![("jollof-rice-large-plantain", 1), ("suya-default-plain", 1)]
    );
}

#[tokio::test]
async fn test_unknown_item_never_reaches_the_cart() {
    let storefront = storefront();
    let cart = storefront.open_cart().await.unwrap();

    let err = storefront
        .add_to_cart(cart, "moi-moi", &ItemConfiguration::new())
        .await
        .unwrap_err();
    assert!(matches!(err, StorefrontError::Catalog(CatalogError::ItemNotFound(_))));
    assert!(storefront.carts.summary(cart).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cart_survives_restart_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorefrontConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..config()
    };

    let storefront = Storefront::start(&config).unwrap();
    let cart = storefront.open_cart().await.unwrap();
    storefront
        .add_to_cart(cart, "margherita-pizza", &ItemConfiguration::new().quantity(2))
        .await
        .unwrap();
    storefront
        .search
        .search_now("pizza", Default::default())
        .await
        .unwrap();
    storefront.shutdown().await.unwrap();

    let storefront = Storefront::start(&config).unwrap();
    let cart = storefront.open_cart().await.unwrap();
    let summary = storefront.carts.summary(cart).await.unwrap();
    assert_eq!(summary.total_items, 2);
    assert_eq!(summary.subtotal, 33.98);
    assert_eq!(storefront.search.history().await.unwrap(), vec!["pizza"]);
    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_config_from_lookup_feeds_start() {
    let dir = tempfile::tempdir().unwrap();
    let menu = dir.path().join("menu.json");
    std::fs::write(
        &menu,
        serde_json::to_string(Catalog::builtin().items()).unwrap(),
    )
    .unwrap();

    let menu_path = menu.to_string_lossy().to_string();
    let config = StorefrontConfig::from_lookup(|key| match key {
        "STOREFRONT_MENU_PATH" => Some(menu_path.clone()),
        "STOREFRONT_PROCESSING_DELAY_MS" => Some("0".to_string()),
        _ => None,
    })
    .unwrap();

    let storefront = Storefront::start(&config).unwrap();
    assert_eq!(storefront.catalog.len(), 10);
    storefront.shutdown().await.unwrap();
}
