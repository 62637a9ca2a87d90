//! # Product Client
//!
//! The Entity Store's public API. Wraps a `ResourceClient<Product>` and turns generic
//! framework failures into [`CatalogError`] kinds:
//!
//! | Framework | Catalog |
//! |---|---|
//! | `NotFound(id)` | `NotFound { id }` |
//! | `AlreadyExists(id)` | `AlreadyExists { id }` |
//! | `EntityError(CatalogError)` | the wrapped error, unchanged |
//! | `ActorClosed` / `ActorDropped` / anything else | `StoreFault { operation, id, cause }` |
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, Operation, ResourceClient};
use crate::model::Product;
use crate::product_store::{CatalogError, CatalogResult};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError, operation: Operation, id: String) -> CatalogError {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound { id },
            FrameworkError::AlreadyExists(id) => CatalogError::AlreadyExists { id },
            FrameworkError::EntityError(inner) => match inner.downcast::<CatalogError>() {
                Ok(err) => *err,
                Err(other) => CatalogError::StoreFault {
                    operation,
                    id,
                    cause: other.to_string(),
                },
            },
            fault @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                CatalogError::StoreFault {
                    operation,
                    id,
                    cause: fault.to_string(),
                }
            }
        }
    }
}

impl ProductClient {
    /// Snapshot of every stored product, ordered by id.
    pub async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        self.list().await
    }

    /// Looks a product up. A blank or unknown id is a miss, not an error.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: &str) -> CatalogResult<Option<Product>> {
        if id.trim().is_empty() {
            debug!("Blank id, skipping lookup");
            return Ok(None);
        }
        self.get(id.to_string()).await
    }

    /// Inserts a new product.
    ///
    /// # Errors
    /// `AlreadyExists` if the id is taken, `ValidationFailed` on a shape or range
    /// violation, `StoreFault` if the store is unreachable.
    #[instrument(skip(self, product), fields(id = %product.id()))]
    pub async fn save(&self, product: Product) -> CatalogResult<Product> {
        debug!("Sending request");
        let id = product.id().to_string();
        self.inner
            .insert(product)
            .await
            .map_err(|e| Self::map_error(e, Operation::Save, id))
    }

    /// Replaces the product stored under `id` wholesale. The stored value always carries
    /// `id`, whatever id `product` holds.
    ///
    /// # Errors
    /// `NotFound` if absent, `ValidationFailed` if the rebound value is invalid,
    /// `StoreFault` if the store is unreachable.
    #[instrument(skip(self, product))]
    pub async fn update(&self, id: &str, product: Product) -> CatalogResult<Product> {
        debug!("Sending request");
        self.inner
            .replace(id.to_string(), product)
            .await
            .map_err(|e| Self::map_error(e, Operation::Update, id.to_string()))
    }

    /// Removes the product stored under `id`.
    pub async fn delete_by_id(&self, id: &str) -> CatalogResult<()> {
        self.delete(id.to_string()).await
    }
}
