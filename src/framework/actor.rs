//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns an in-memory keyed
//! collection of entities. It is the "Server" side of the Actor Model: requests are
//! processed sequentially, so the collection needs no lock and every check-then-act
//! sequence is atomic.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct owns the state (`store`) and the receiver end of the channel. Nothing else
/// ever holds a reference into `store`: reads are answered with clones, so a caller can
/// never observe a value that is half way through being replaced.
///
/// # Operations
///
/// * **Insert**: validates the entity, then inserts it only if the key is vacant
///   (`AlreadyExists` otherwise).
/// * **Get**: clone of the stored value, or `None`.
/// * **List**: clone of every stored value, ordered by id.
/// * **Replace**: `NotFound` if the key is absent; otherwise rebinds the entity to the
///   requested key, validates it, and swaps it in wholesale.
/// * **Remove**: `NotFound` if the key is absent; otherwise drops the value.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client
    /// calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "catalog_store::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            debug!(entity_type, operation = %msg.operation(), "Request");
            self.handle(entity_type, msg);
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn handle(&mut self, entity_type: &str, msg: ResourceRequest<T>) {
        match msg {
            ResourceRequest::Insert { entity, respond_to } => {
                debug!(entity_type, ?entity, "Insert");
                let result = self.insert(entity);
                match &result {
                    Ok(item) => info!(entity_type, id = %item.id(), size = self.store.len(), "Created"),
                    Err(e) => warn!(entity_type, error = %e, "Insert rejected"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Get { id, respond_to } => {
                let item = self.store.get(&id).cloned();
                debug!(entity_type, %id, found = item.is_some(), "Get");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::List { respond_to } => {
                let mut items: Vec<T> = self.store.values().cloned().collect();
                items.sort_by(|a, b| a.id().cmp(b.id()));
                debug!(entity_type, size = items.len(), "List");
                let _ = respond_to.send(Ok(items));
            }
            ResourceRequest::Replace {
                id,
                entity,
                respond_to,
            } => {
                debug!(entity_type, %id, ?entity, "Replace");
                let result = self.replace(id, entity);
                match &result {
                    Ok(item) => info!(entity_type, id = %item.id(), "Updated"),
                    Err(e) => warn!(entity_type, error = %e, "Replace rejected"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Remove { id, respond_to } => {
                let result = match self.store.remove(&id) {
                    Some(_) => {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        Ok(())
                    }
                    None => {
                        warn!(entity_type, %id, "Not found");
                        Err(FrameworkError::NotFound(id.to_string()))
                    }
                };
                let _ = respond_to.send(result);
            }
        }
    }

    fn insert(&mut self, entity: T) -> Result<T, FrameworkError> {
        entity
            .validate()
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        match self.store.entry(entity.id().clone()) {
            Entry::Occupied(slot) => Err(FrameworkError::AlreadyExists(slot.key().to_string())),
            Entry::Vacant(slot) => Ok(slot.insert(entity).clone()),
        }
    }

    fn replace(&mut self, id: T::Id, entity: T) -> Result<T, FrameworkError> {
        let Some(slot) = self.store.get_mut(&id) else {
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        let entity = entity.with_id(id);
        entity
            .validate()
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        *slot = entity.clone();
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: String,
        body: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("blank note")]
    struct BlankNote;

    impl ActorEntity for Note {
        type Id = String;
        type Error = BlankNote;

        fn id(&self) -> &String {
            &self.id
        }

        fn with_id(self, id: String) -> Self {
            Self { id, ..self }
        }

        fn validate(&self) -> Result<(), BlankNote> {
            if self.id.is_empty() || self.body.is_empty() {
                Err(BlankNote)
            } else {
                Ok(())
            }
        }
    }

    fn note(id: &str, body: &str) -> Note {
        Note {
            id: id.to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_get_replace_remove() {
        let (actor, client) = ResourceActor::<Note>::new(8);
        tokio::spawn(actor.run());

        let stored = client.insert(note("a", "first")).await.unwrap();
        assert_eq!(stored, note("a", "first"));

        let duplicate = client.insert(note("a", "second")).await;
        assert!(matches!(duplicate, Err(FrameworkError::AlreadyExists(id)) if id == "a"));

        // The payload id is ignored in favour of the key.
        let replaced = client
            .replace("a".to_string(), note("zzz", "edited"))
            .await
            .unwrap();
        assert_eq!(replaced, note("a", "edited"));
        assert_eq!(client.get("a".to_string()).await.unwrap(), Some(note("a", "edited")));
        assert_eq!(client.get("zzz".to_string()).await.unwrap(), None);

        client.remove("a".to_string()).await.unwrap();
        assert!(matches!(
            client.remove("a".to_string()).await,
            Err(FrameworkError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_validation_runs_on_every_write() {
        let (actor, client) = ResourceActor::<Note>::new(8);
        tokio::spawn(actor.run());

        let blank = client.insert(note("a", "")).await;
        assert!(matches!(blank, Err(FrameworkError::EntityError(_))));

        client.insert(note("a", "ok")).await.unwrap();
        let blank_update = client.replace("a".to_string(), note("a", "")).await;
        assert!(matches!(blank_update, Err(FrameworkError::EntityError(_))));
        assert_eq!(client.get("a".to_string()).await.unwrap(), Some(note("a", "ok")));
    }

    #[tokio::test]
    async fn test_list_is_ordered_snapshot() {
        let (actor, client) = ResourceActor::<Note>::new(8);
        tokio::spawn(actor.run());

        for id in ["c", "a", "b"] {
            client.insert(note(id, "x")).await.unwrap();
        }
        let snapshot = client.list().await.unwrap();
        client.remove("b".to_string()).await.unwrap();

        let ids: Vec<&str> = snapshot.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(client.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_racing_inserts_admit_exactly_one() {
        let (actor, client) = ResourceActor::<Note>::new(64);
        tokio::spawn(actor.run());

        let mut handles = Vec::new();
        for i in 0..16 {
            let client = client.clone();
            handles.push(tokio::spawn(async move {
                client.insert(note("same", &format!("writer {i}"))).await
            }));
        }

        let mut created = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(FrameworkError::AlreadyExists(_)) => rejected += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(created, 1);
        assert_eq!(rejected, 15);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_closed() {
        let (actor, client) = ResourceActor::<Note>::new(1);
        drop(actor);

        let err = client.get("a".to_string()).await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
    }
}
