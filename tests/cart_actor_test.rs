use kitchen_storefront::cart_actor;
use kitchen_storefront::catalog::{build_line_item, Catalog, ItemConfiguration};
use kitchen_storefront::clients::ActorClient;
use kitchen_storefront::model::{CartCreate, CartId, LineItem};
use kitchen_storefront::storage::{KeyValueStore, MemoryStore, CART_KEY};
use std::sync::Arc;

fn line(item_id: &str, config: ItemConfiguration) -> LineItem {
    let catalog = Catalog::builtin();
    build_line_item(catalog.find(item_id).unwrap(), &config)
}

fn stored_lines(store: &MemoryStore) -> Vec<LineItem> {
    serde_json::from_str(&store.get(CART_KEY).unwrap().unwrap()).unwrap()
}

/// Real Cart actor over an in-memory store.
#[tokio::test]
async fn test_cart_mutations_write_through() {
    let store = Arc::new(MemoryStore::new());
    let (actor, carts) = cart_actor::new();
    let handle = tokio::spawn(actor.run(store.clone()));

    let cart = carts.open_cart(CartCreate::default()).await.unwrap();
    assert_eq!(cart, CartId(1));

    let jollof = ItemConfiguration::new().size("large").addon("plantain");
    carts.add_item(cart, line("jollof-rice", jollof.clone())).await.unwrap();
    let summary = carts.add_item(cart, line("jollof-rice", jollof)).await.unwrap();
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.total_items, 2);
    assert_eq!(summary.subtotal, 43.96);

    let summary = carts
        .add_item(cart, line("suya", ItemConfiguration::new().quantity(3)))
        .await
        .unwrap();
    assert_eq!(summary.total_items, 5);
    assert_eq!(stored_lines(&store), summary.lines);

    let summary = carts
        .update_quantity(cart, "suya-default-plain", 1)
        .await
        .unwrap();
    assert_eq!(summary.total_items, 3);

    let summary = carts
        .update_quantity(cart, "suya-default-plain", -1)
        .await
        .unwrap();
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(stored_lines(&store).len(), 1);

    let summary = carts.clear(cart).await.unwrap();
    assert_eq!(summary.subtotal, 0.0);
    assert_eq!(summary.total_items, 0);
    assert_eq!(store.get(CART_KEY).unwrap().as_deref(), Some("[]"));

    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_update_to_zero_and_unknown_ids() {
    let store = Arc::new(MemoryStore::new());
    let (actor, carts) = cart_actor::new();
    tokio::spawn(actor.run(store));

    let cart = carts.open_cart(CartCreate::default()).await.unwrap();
    carts
        .add_item(cart, line("caesar-salad", ItemConfiguration::new()))
        .await
        .unwrap();

    let summary = carts.remove_item(cart, "nope").await.unwrap();
    assert_eq!(summary.total_items, 1);
    let summary = carts.update_quantity(cart, "nope", 5).await.unwrap();
    assert_eq!(summary.total_items, 1);

    let summary = carts
        .update_quantity(cart, "caesar-salad-default-plain", 0)
        .await
        .unwrap();
    assert!(summary.is_empty());
}

#[tokio::test]
async fn test_cart_restores_from_storage() {
    let store = Arc::new(MemoryStore::new());
    let saved = vec![line("egusi-soup", ItemConfiguration::new().quantity(2))];
    store
        .set(CART_KEY, &serde_json::to_string(&saved).unwrap())
        .unwrap();

    let (actor, carts) = cart_actor::new();
    tokio::spawn(actor.run(store));

    let cart = carts.open_cart(CartCreate::default()).await.unwrap();
    let summary = carts.summary(cart).await.unwrap();
    assert_eq!(summary.lines, saved);
    assert_eq!(summary.subtotal, 31.98);

    let fetched = carts.get(cart).await.unwrap().unwrap();
    assert_eq!(fetched.lines, saved);
}

#[tokio::test]
async fn test_corrupt_storage_opens_empty_cart() {
    let store = Arc::new(MemoryStore::new());
    store.set(CART_KEY, "[{\"id\": 1").unwrap();

    let (actor, carts) = cart_actor::new();
    tokio::spawn(actor.run(store));

    let cart = carts.open_cart(CartCreate::default()).await.unwrap();
    let summary = carts.summary(cart).await.unwrap();
    assert!(summary.is_empty());
    assert_eq!(summary.total_items, 0);
}

#[tokio::test]
async fn test_concurrent_adds_are_serialized() {
    let store = Arc::new(MemoryStore::new());
    let (actor, carts) = cart_actor::new();
    tokio::spawn(actor.run(store));
    let cart = carts.open_cart(CartCreate::default()).await.unwrap();

    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let carts = carts.clone();
            tokio::spawn(async move {
                carts
                    .add_item(cart, line("spring-rolls", ItemConfiguration::new()))
                    .await
                    .unwrap()
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let summary = carts.summary(cart).await.unwrap();
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.total_items, 20);
    assert_eq!(summary.subtotal, 139.8);
}

#[tokio::test]
async fn test_missing_cart_is_not_found() {
    let (actor, carts) = cart_actor::new();
    tokio::spawn(actor.run(Arc::new(MemoryStore::new())));

    let err = carts.summary(CartId(99)).await.unwrap_err();
    assert_eq!(
        err,
        kitchen_storefront::cart_actor::CartError::NotFound("cart_99".to_string())
    );
}

#[tokio::test]
async fn test_zero_quantity_add_is_ignored() {
    let store = Arc::new(MemoryStore::new());
    let (actor, carts) = cart_actor::new();
    tokio::spawn(actor.run(store.clone()));
    let cart = carts.open_cart(CartCreate::default()).await.unwrap();

    let mut empty_line = line("suya", ItemConfiguration::new());
    empty_line.quantity = 0;
    let summary = carts.add_item(cart, empty_line.clone()).await.unwrap();
    assert!(summary.is_empty());
    assert!(store.get(CART_KEY).unwrap().is_none());

    carts
        .add_item(cart, line("suya", ItemConfiguration::new()))
        .await
        .unwrap();
    let summary = carts.add_item(cart, empty_line).await.unwrap();
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.lines[0].quantity, 1);
}

#[tokio::test]
async fn test_huge_quantities_saturate_without_killing_the_actor() {
    let store = Arc::new(MemoryStore::new());
    let (actor, carts) = cart_actor::new();
    tokio::spawn(actor.run(store));
    let cart = carts.open_cart(CartCreate::default()).await.unwrap();

    let suya = line("suya", ItemConfiguration::new());
    carts.add_item(cart, suya.clone()).await.unwrap();
    carts
        .add_item(cart, line("caesar-salad", ItemConfiguration::new()))
        .await
        .unwrap();
    let summary = carts
        .update_quantity(cart, &suya.id, i64::MAX)
        .await
        .unwrap();
    assert_eq!(summary.lines[0].quantity, u32::MAX);

    let summary = carts.add_item(cart, suya).await.unwrap();
    assert_eq!(summary.lines[0].quantity, u32::MAX);
    assert_eq!(summary.total_items, u32::MAX);

    // Still serving requests.
    let summary = carts.summary(cart).await.unwrap();
    assert_eq!(summary.lines.len(), 2);
}
