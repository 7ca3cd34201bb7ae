//! Error types for the Order actor.

use crate::cart_actor::CartError;
use crate::model::DeliveryStage;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Checkout was attempted on a cart with no lines. Nothing was changed.
    #[error("Your cart is empty")]
    EmptyCart,

    /// The cart the order refers to does not exist.
    #[error("Cart not found: {0}")]
    CartNotFound(String),

    /// Stages only move forward.
    #[error("Cannot move order from {current} back to {requested}")]
    StageRegression {
        current: DeliveryStage,
        requested: DeliveryStage,
    },

    /// The cart actor failed while checking out.
    #[error("Cart error: {0}")]
    Cart(CartError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<CartError> for OrderError {
    fn from(e: CartError) -> Self {
        match e {
            CartError::NotFound(id) => OrderError::CartNotFound(id),
            other => OrderError::Cart(other),
        }
    }
}
