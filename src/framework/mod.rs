//! Generic actor framework for resource management.
//!
//! The building blocks the cart and order actors are made of:
//!
//! - [`ActorEntity`] - trait a resource implements to be managed by an actor
//! - [`ResourceActor`] - the task that owns the entities and processes requests in order
//! - [`ResourceClient`] - cloneable, typed handle that sends requests
//! - [`FrameworkError`] - plumbing errors, plus the boxed entity error
//!
//! # Testing
//!
//! See [`mock`] for doubles that stand in for an actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
