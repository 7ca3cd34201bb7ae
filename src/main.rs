//! Demo: browse, configure, add to cart, search, check out and follow the delivery.

use kitchen_storefront::catalog::ItemConfiguration;
use kitchen_storefront::config::StorefrontConfig;
use kitchen_storefront::error::StorefrontError;
use kitchen_storefront::lifecycle::{setup_tracing, Storefront};
use kitchen_storefront::model::{OrderCreate, PaymentMethod};
use kitchen_storefront::search::{parse_command, SearchFilters};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), StorefrontError> {
    setup_tracing();

    let config = StorefrontConfig::from_env()?;
    let mut storefront = Storefront::start(&config)?;

    let page = storefront.catalog.category_page("rice")?;
    info!(title = %page.title, items = page.items.len(), "Browsing category");

    let cart_id = storefront.open_cart().await?;
    let span = tracing::info_span!("cart", %cart_id);
    let summary = async {
        let large_with_plantain = ItemConfiguration::new()
            .size("large")
            .addon("plantain")
            .quantity(2);
        storefront
            .add_to_cart(cart_id, "jollof-rice", &large_with_plantain)
            .await?;
        storefront
            .add_to_cart(cart_id, "suya", &ItemConfiguration::new())
            .await
    }
    .instrument(span)
    .await?;
    info!(
        subtotal = summary.subtotal,
        total_items = summary.total_items,
        "Cart ready"
    );

    let mut query = String::new();
    let mut filters = SearchFilters::default();
    for spoken in ["find pepper soup", "sort by best rated"] {
        parse_command(spoken).apply(&mut query, &mut filters);
    }
    let outcome = storefront.search.search_now(query, filters).await?;
    let names: Vec<&str> = outcome.results.iter().map(|i| i.name.as_str()).collect();
    info!(query = %outcome.query, ?names, "Search results");

    let params = OrderCreate::new(cart_id, "123 Main Street, Apt 4B")
        .with_payment(PaymentMethod::Card)
        .with_promo_code("SAVE10");
    let order = match storefront.place_order(params).await {
        Ok(order) => order,
        Err(e) => {
            error!(error = %e, "Checkout failed");
            storefront.shutdown().await?;
            return Err(e);
        }
    };
    info!(order_id = %order.id, total = order.total(), "Order placed");

    let tracker = storefront.track(order.id);
    let mut updates = tracker.subscribe();
    while updates.changed().await.is_ok() {
        let snapshot = updates.borrow_and_update().clone();
        info!(
            stage = snapshot.label,
            minutes = snapshot.minutes_remaining,
            "Tracking update"
        );
        if snapshot.completed {
            break;
        }
    }

    storefront.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
