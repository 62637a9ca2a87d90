//! Generic actor framework for keyed entity storage.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that value types implement to be stored by an actor
//! - [`ResourceActor`] - Generic actor that owns the keyed collection
//! - [`ResourceClient`] - Cloneable async handle for talking to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] for a scripted client that needs no running actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Operation, ResourceRequest, Response};
