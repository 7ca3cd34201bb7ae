//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `fmt` subscriber filtered by `RUST_LOG`.
//! Module paths are hidden (`with_target(false)`); log lines carry structured fields
//! such as `entity_type`, `cart_id` and `order_id` instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle events and mutations
//! RUST_LOG=debug cargo run    # full payloads: line items, quotes, search filters
//! ```
//!
//! With `RUST_LOG=info` a checkout reads roughly:
//!
//! ```text
//! INFO Created entity_type="Cart" id=cart_1 size=1
//! INFO Action ok entity_type="Cart" id=cart_1
//! INFO place_order{cart_id=cart_1}: Sending place_order to actor
//! INFO Checked out order_id=ORD-000001 total=28.33
//! INFO Created entity_type="Order" id=ORD-000001 size=1
//! INFO tracking{order_id=ORD-000001}: Stage advanced stage=Cooking Food minutes=15
//! ```

/// Initializes the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
