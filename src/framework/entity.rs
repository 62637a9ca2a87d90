//! # ActorEntity Trait
//!
//! The contract a value type must satisfy to be kept by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Entities are immutable values keyed by a caller-supplied identifier. The actor never
//! mutates an entity in place: an update replaces the stored value wholesale with a copy
//! rebound to the authoritative key via [`ActorEntity::with_id`].
//!
//! # Validation Hook
//! [`ActorEntity::validate`] runs on every write path (insert and replace) *inside* the
//! actor, after the identifier has been forced, so no request can leave an invalid value
//! in the store.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any entity must implement to be managed by a `ResourceActor`.
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique key. `Ord` lets the actor hand out snapshots in a stable order.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug;

    /// The error returned by [`ActorEntity::validate`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier this value is stored under.
    fn id(&self) -> &Self::Id;

    /// Returns a copy of this value bound to `id`.
    fn with_id(self, id: Self::Id) -> Self;

    /// Checks the value's write invariants.
    fn validate(&self) -> Result<(), Self::Error>;
}
