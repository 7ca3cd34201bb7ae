//! # Cart Client
//!
//! Typed API over the cart actor. Every mutating call returns the [`CartSummary`]
//! computed after the change, so callers never derive totals themselves.

use crate::cart_actor::{CartAction, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, CartCreate, CartId, CartSummary, LineItem};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            other => other
                .downcast_entity::<CartError>()
                .unwrap_or_else(|e| CartError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl CartClient {
    /// Opens a cart, seeded from whatever is stored under `params.storage_key`.
    #[instrument(skip(self))]
    pub async fn open_cart(&self, params: CartCreate) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    async fn act(&self, id: CartId, action: CartAction) -> Result<CartSummary, CartError> {
        self.inner
            .perform_action(id, action)
            .await
            .map(|r| r.into_summary())
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, line), fields(line_id = %line.id, quantity = line.quantity))]
    pub async fn add_item(&self, id: CartId, line: LineItem) -> Result<CartSummary, CartError> {
        debug!(?line, "Sending request");
        self.act(id, CartAction::AddItem(line)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: CartId, line_id: &str) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        self.act(id, CartAction::RemoveItem(line_id.to_string()))
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: CartId,
        line_id: &str,
        quantity: i64,
    ) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        self.act(
            id,
            CartAction::UpdateQuantity {
                line_id: line_id.to_string(),
                quantity,
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, id: CartId) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        self.act(id, CartAction::Clear).await
    }

    /// Removes what a checkout took, leaving anything added since.
    #[instrument(skip(self, taken), fields(lines = taken.len()))]
    pub async fn release(
        &self,
        id: CartId,
        taken: Vec<LineItem>,
    ) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        self.act(id, CartAction::Release(taken)).await
    }

    #[instrument(skip(self))]
    pub async fn summary(&self, id: CartId) -> Result<CartSummary, CartError> {
        self.act(id, CartAction::Summary).await
    }
}
