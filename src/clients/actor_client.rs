use crate::framework::{ActorEntity, FrameworkError, Operation, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read and delete calls.
///
/// Implementors supply the inner [`ResourceClient`] and a translation from
/// [`FrameworkError`] into their own error type; the translation receives the operation
/// and the id involved so infrastructure faults can be reported precisely.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError, operation: Operation, id: String) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        let key = id.to_string();
        self.inner()
            .get(id)
            .await
            .map_err(|e| Self::map_error(e, Operation::Read, key))
    }

    /// Snapshot of every stored entity.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .list()
            .await
            .map_err(|e| Self::map_error(e, Operation::Read, "*".to_string()))
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        let key = id.to_string();
        self.inner()
            .remove(id)
            .await
            .map_err(|e| Self::map_error(e, Operation::Delete, key))
    }
}
