//! # Kitchen Storefront
//!
//! > **The core of a food-ordering storefront: menu, cart, checkout, search and
//! > delivery tracking.**
//!
//! There is no server and no payment backend. State that must survive a restart (the
//! cart, recent searches, search analytics) lives in a small key-value store, and
//! "delivery" is a timer walking through four fixed stages.
//!
//! ## 🏗️ Design
//!
//! Stateful pieces are **resource actors**: a generic [`ResourceActor`](framework::ResourceActor)
//! owns the entities in its own Tokio task and handles CRUD plus custom actions one
//! message at a time. Two concurrent "add to cart" requests are therefore applied in
//! arrival order with no lock around the cart.
//!
//! Pure logic (price resolution, the search predicate, checkout arithmetic, the tracking
//! state machine) is plain functions and structs, tested without a runtime.
//!
//! ### Errors
//! Each component has its own `thiserror` enum ([`CartError`](cart_actor::CartError),
//! [`OrderError`](order_actor::OrderError), [`CatalogError`](catalog::CatalogError), ...).
//! Entity errors cross the actor boundary boxed and are downcast back by the typed
//! clients, so callers match `OrderError::EmptyCart` directly.
//! [`StorefrontError`](error::StorefrontError) aggregates them all.
//!
//! ### Context injection
//! Actor dependencies are handed over in `run(context)`, not at construction. See
//! [`lifecycle`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - the generic actor, client, entity trait and test mocks
//! - [`model`] - menu items, carts and orders
//! - [`catalog`] - menu loading, lookups, category pages and [`pricing`](catalog::pricing)
//! - [`cart_actor`], [`order_actor`] - the two resources
//! - [`clients`] - typed [`CartClient`](clients::CartClient) and [`OrderClient`](clients::OrderClient)
//! - [`checkout`] - fees and promo codes
//! - [`search`] - filtering, history, analytics, commands and the debounced service
//! - [`tracking`] - the delivery simulator
//! - [`storage`] - the key-value store seam
//! - [`config`] - `STOREFRONT_*` environment settings
//! - [`lifecycle`] - the [`Storefront`](lifecycle::Storefront) orchestrator and tracing setup
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! STOREFRONT_DATA_DIR=./data STOREFRONT_STAGE_INTERVAL_SECS=1 RUST_LOG=debug cargo run
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod search;
pub mod storage;
pub mod tracking;
