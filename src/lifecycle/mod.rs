//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the storefront's tasks.
//!
//! Dependencies are injected late, through `run(context)` rather than at construction:
//! the cart actor receives the key-value store and the order actor receives an
//! [`OrderContext`](crate::order_actor::OrderContext) holding a cart client. The graph
//! is acyclic (orders depend on carts, never the reverse), so dropping the clients is
//! enough to shut everything down in order.

pub mod storefront;
pub mod tracing;

pub use storefront::*;
pub use self::tracing::*;
