//! # ActorEntity Trait
//!
//! The contract every stateful storefront resource (the [`Cart`](crate::model::Cart),
//! the [`Order`](crate::model::Order)) implements so the generic
//! [`ResourceActor`](super::ResourceActor) can own it.
//!
//! Associated types pin each resource to its own payloads: a cart is opened with a
//! [`CartCreate`](crate::model::CartCreate) and mutated with
//! [`CartAction`](crate::cart_actor::CartAction); the compiler refuses an order payload
//! sent to the cart actor.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] runs after construction and before the entity is stored.
//!   The cart uses it to seed itself from persistent storage; the order uses it to run
//!   checkout against the cart actor.
//! - [`ActorEntity::on_delete`] runs before removal.
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they may talk to other actors. The `Context` associated type is
/// injected into every hook at `run()` time ("late binding"), which is how the order actor
/// receives its [`CartClient`](crate::clients::CartClient) and how the cart actor receives
/// its storage backend.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier; generated by the actor from a `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `AddItem`, `RecordStage`).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum per actor rather than per message. Callers match on a single type;
    /// the price is that an action may nominally return a variant it never produces.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from the generated id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction. A failure here means the entity is never stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
