//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod cart_client;
pub mod order_client;

pub use actor_client::ActorClient;
pub use cart_client::*;
pub use order_client::*;
