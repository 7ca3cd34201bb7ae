use crate::cart_actor;
use crate::catalog::{build_line_item, Catalog, ItemConfiguration};
use crate::clients::{ActorClient, CartClient, OrderClient};
use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::model::{CartCreate, CartId, CartSummary, Order, OrderCreate, OrderId};
use crate::order_actor::{self, OrderContext, OrderError};
use crate::search::{SearchClient, SearchService};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::tracking::{spawn_tracker, TrackerHandle, TrackingSettings};
use std::sync::Arc;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{error, info};

/// The running storefront: catalog, actors and the search service, wired together.
///
/// `Storefront` is the explicit context object the pages work against:
/// - **Lifecycle Management**: starts the cart and order actors and the search service
/// - **Dependency Wiring**: the order actor gets the cart client, fees and processing
///   delay as its context
/// - **Tracking**: starts one tracker per placed order
///
/// # Example
///
/// ```ignore
/// let mut storefront = Storefront::start(&StorefrontConfig::from_env()?)?;
/// let cart = storefront.open_cart().await?;
/// storefront.add_to_cart(cart, "jollof-rice", &ItemConfiguration::new().size("large")).await?;
/// let order = storefront.place_order(OrderCreate::new(cart, "123 Main Street")).await?;
/// let tracker = storefront.track(order.id);
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    pub catalog: Catalog,
    pub carts: CartClient,
    pub orders: OrderClient,
    pub search: SearchClient,
    tracking: TrackingSettings,
    trackers: Vec<AbortHandle>,
    handles: Vec<JoinHandle<()>>,
}

impl Storefront {
    /// Loads the menu and opens the store named by `config`, then starts everything.
    pub fn start(config: &StorefrontConfig) -> Result<Self, StorefrontError> {
        let catalog = match &config.menu_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin(),
        };
        let store: Arc<dyn KeyValueStore> = match &config.data_dir {
            Some(dir) => Arc::new(FileStore::open(dir)?),
            None => Arc::new(MemoryStore::new()),
        };
        Ok(Self::new(catalog, store, config))
    }

    /// Starts the actors and the search service over an existing catalog and store.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(catalog: Catalog, store: Arc<dyn KeyValueStore>, config: &StorefrontConfig) -> Self {
        // 1. Create actors (no dependencies yet)
        let (cart_actor, carts) = cart_actor::new();
        let (order_actor, orders) = order_actor::new();
        let (search_service, search) =
            SearchService::new(catalog.clone(), store.clone(), config.search);

        // 2. Start them with their context injected
        let cart_handle = tokio::spawn(cart_actor.run(store));
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            carts: carts.clone(),
            checkout: config.checkout.clone(),
            processing_delay: config.processing_delay,
        }));
        let search_handle = tokio::spawn(search_service.run());

        info!(items = catalog.len(), "Storefront started");
        Self {
            catalog,
            carts,
            orders,
            search,
            tracking: config.tracking,
            trackers: Vec::new(),
            handles: vec![cart_handle, order_handle, search_handle],
        }
    }

    /// Opens the session cart, restored from storage.
    pub async fn open_cart(&self) -> Result<CartId, StorefrontError> {
        Ok(self.carts.open_cart(CartCreate::default()).await?)
    }

    /// Prices `item_id` with `config` and adds it to the cart.
    pub async fn add_to_cart(
        &self,
        cart_id: CartId,
        item_id: &str,
        config: &ItemConfiguration,
    ) -> Result<CartSummary, StorefrontError> {
        let item = self.catalog.find(item_id)?;
        let line = build_line_item(item, config);
        Ok(self.carts.add_item(cart_id, line).await?)
    }

    /// Checks out and returns the stored order.
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, StorefrontError> {
        let id = self.orders.place_order(params).await?;
        self.order(id).await
    }

    pub async fn order(&self, id: OrderId) -> Result<Order, StorefrontError> {
        self.orders
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()).into())
    }

    /// Starts the delivery simulation for a placed order.
    pub fn track(&mut self, order_id: OrderId) -> TrackerHandle {
        let handle = spawn_tracker(order_id, self.tracking, self.orders.clone());
        self.trackers.push(handle.abort_handle());
        handle
    }

    /// Gracefully shuts down the storefront.
    ///
    /// Trackers are aborted first since they hold order clients. Dropping the clients
    /// then closes every channel; each actor drains, logs its final size and exits.
    pub async fn shutdown(self) -> Result<(), StorefrontError> {
        info!("Shutting down storefront...");
        for tracker in &self.trackers {
            tracker.abort();
        }

        drop(self.search);
        drop(self.orders);
        drop(self.carts);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(StorefrontError::TaskFailed(e.to_string()));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
