//! # Generic Messages
//!
//! Request types exchanged between [`ResourceClient`](crate::framework::ResourceClient)
//! and [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// The kind of store operation a request performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Read,
    Save,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Read => "read",
            Self::Save => "save",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Internal message type sent to the actor.
///
/// Every variant is answered exactly once through its `respond_to` channel. Because the
/// actor drains these one at a time, each request is atomic with respect to every other:
/// an `Insert` checks for the key and inserts in the same step, so two racing inserts of
/// the same fresh id cannot both succeed.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Insert {
        entity: T,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Replace {
        id: T::Id,
        entity: T,
        respond_to: Response<T>,
    },
    Remove {
        id: T::Id,
        respond_to: Response<()>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Insert { .. } => Operation::Save,
            Self::Get { .. } | Self::List { .. } => Operation::Read,
            Self::Replace { .. } => Operation::Update,
            Self::Remove { .. } => Operation::Delete,
        }
    }
}
