//! [`ActorEntity`] implementation for [`Cart`].
//!
//! The cart's context is the shared key-value store. Opening a cart seeds it from the
//! stored blob; every mutating action writes the full line list back.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::framework::ActorEntity;
use crate::model::{Cart, CartCreate, CartId};
use crate::storage::{load_json, save_json, KeyValueStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

impl Cart {
    fn persist(&self, store: &dyn KeyValueStore) {
        if let Err(e) = save_json(store, &self.storage_key, &self.lines) {
            warn!(cart_id = %self.id, error = %e, "Failed to persist cart");
        }
    }
}

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = Arc<dyn KeyValueStore>;
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, CartError> {
        Ok(Cart::new(id, params.storage_key))
    }

    /// Seeds the lines from storage. An unreadable blob opens an empty cart.
    async fn on_create(&mut self, store: &Self::Context) -> Result<(), CartError> {
        let mut lines: Vec<crate::model::LineItem> = load_json(store.as_ref(), &self.storage_key);
        lines.retain(|l| l.quantity > 0);
        debug!(cart_id = %self.id, lines = lines.len(), "Restored cart");
        self.lines = lines;
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _store: &Self::Context) -> Result<(), CartError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        store: &Self::Context,
    ) -> Result<CartActionResult, CartError> {
        let result = match action {
            CartAction::AddItem(line) => {
                if self.add(line) {
                    self.persist(store.as_ref());
                }
                CartActionResult::AddItem(self.summary())
            }
            CartAction::RemoveItem(line_id) => {
                if self.remove(&line_id) {
                    self.persist(store.as_ref());
                }
                CartActionResult::RemoveItem(self.summary())
            }
            CartAction::UpdateQuantity { line_id, quantity } => {
                if self.set_quantity(&line_id, quantity) {
                    self.persist(store.as_ref());
                }
                CartActionResult::UpdateQuantity(self.summary())
            }
            CartAction::Clear => {
                self.clear();
                self.persist(store.as_ref());
                CartActionResult::Clear(self.summary())
            }
            CartAction::Release(taken) => {
                if self.release(&taken) {
                    self.persist(store.as_ref());
                }
                CartActionResult::Release(self.summary())
            }
            CartAction::Summary => CartActionResult::Summary(self.summary()),
        };
        Ok(result)
    }
}
