//! # Cart Actor
//!
//! The actor is the single owner of the cart lines. Adds, removals and quantity changes
//! are applied in arrival order.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Cart`](crate::model::Cart)
//! - [`error`] - [`CartError`]
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//!
//! ```rust,ignore
//! let (actor, client) = cart_actor::new();
//! tokio::spawn(actor.run(store.clone()));
//! let cart_id = client.open_cart(CartCreate::default()).await?;
//! let summary = client.add_item(cart_id, line).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::Cart;

/// Creates a new Cart actor and its client.
pub fn new() -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, CartClient::new(generic_client))
}
