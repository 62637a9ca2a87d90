use crate::clients::ProductClient;
use crate::lifecycle::config::CatalogConfig;
use crate::loader::{partition_records, BulkLoader, LoadReport};
use crate::product_store::{CatalogError, CatalogResult};
use crate::query::QueryEngine;
use tracing::{error, info, warn};

/// Where a [`CatalogSystem`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemState {
    /// Store running, bulk load not yet attempted.
    Starting,
    /// Bulk load done; queries are served.
    Ready,
    /// Bulk load failed; the catalog refuses to serve.
    Failed,
}

/// The runtime orchestrator for the catalog.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: starting the store actor and stopping it on shutdown
/// - **Initial Load**: running a [`BulkLoader`] once and storing every valid record
/// - **Access Control**: handing out the store client and query engine only once ready
///
/// # Example
///
/// ```ignore
/// let config = CatalogConfig::from_env()?;
/// let (system, report) = CatalogSystem::start(config, &JsonFileLoader).await?;
///
/// let laptops = system.queries()?.filter_by_category("Laptops").await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    config: CatalogConfig,
    products: ProductClient,
    queries: QueryEngine,
    state: SystemState,
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Spawns the store actor. Must be called inside a tokio runtime.
    ///
    /// # Errors
    /// `InitializationFailed` if `config` is invalid.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        config.validate().map_err(CatalogError::initialization)?;

        let (actor, products) = crate::product_store::new(config.channel_capacity);
        let handle = tokio::spawn(actor.run());
        let queries = QueryEngine::new(products.clone());

        Ok(Self {
            config,
            products,
            queries,
            state: SystemState::Starting,
            handle,
        })
    }

    /// Creates the system and runs the initial load from `config.data_source`.
    pub async fn start(
        config: CatalogConfig,
        loader: &dyn BulkLoader,
    ) -> CatalogResult<(Self, LoadReport)> {
        let mut system = Self::new(config)?;
        let report = system.init(loader).await?;
        Ok((system, report))
    }

    /// Loads every record from the configured source into the store.
    ///
    /// Bad records are skipped and logged; the returned report lists them. An unreadable
    /// source marks the system [`Failed`](SystemState::Failed).
    ///
    /// # Errors
    /// `InitializationFailed` if the source cannot be loaded, the store rejects the load,
    /// or the system has already been initialised.
    pub async fn init(&mut self, loader: &dyn BulkLoader) -> CatalogResult<LoadReport> {
        if self.state != SystemState::Starting {
            return Err(CatalogError::initialization("catalog already initialised"));
        }

        let source = self.config.data_source.as_str();
        info!(source, "Loading catalog");
        let records = match loader.load(source).await {
            Ok(records) => records,
            Err(e) => {
                error!(source, error = %e, "Catalog load failed");
                self.state = SystemState::Failed;
                return Err(CatalogError::initialization(e));
            }
        };

        let report = partition_records(records);
        for skipped in &report.skipped {
            warn!(
                index = skipped.index,
                id = skipped.record.id.as_deref().unwrap_or("<none>"),
                reason = %skipped.reason,
                "Skipping record"
            );
        }

        for product in &report.loaded {
            if let Err(e) = self.products.save(product.clone()).await {
                error!(id = %product.id(), error = %e, "Catalog load failed");
                self.state = SystemState::Failed;
                return Err(CatalogError::initialization(e));
            }
        }

        self.state = SystemState::Ready;
        info!(
            loaded = report.loaded.len(),
            skipped = report.skipped.len(),
            "Catalog ready"
        );
        Ok(report)
    }

    pub fn state(&self) -> SystemState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == SystemState::Ready
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The Entity Store client.
    ///
    /// # Errors
    /// `InitializationFailed` unless the system is ready.
    pub fn products(&self) -> CatalogResult<&ProductClient> {
        self.ensure_ready()?;
        Ok(&self.products)
    }

    /// The Query Engine.
    ///
    /// # Errors
    /// `InitializationFailed` unless the system is ready.
    pub fn queries(&self) -> CatalogResult<&QueryEngine> {
        self.ensure_ready()?;
        Ok(&self.queries)
    }

    /// Stops the store actor and waits for it to finish.
    ///
    /// The actor exits once every client is dropped, so clones handed out by
    /// [`products`](Self::products) or [`queries`](Self::queries) must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        drop(self.queries);
        drop(self.products);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }

    fn ensure_ready(&self) -> CatalogResult<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(CatalogError::initialization("catalog not initialised"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{LoadError, StaticLoader};
    use crate::model::ProductRecord;
    use crate::product_store::ErrorKind;
    use async_trait::async_trait;

    struct BrokenLoader;

    #[async_trait]
    impl BulkLoader for BrokenLoader {
        async fn load(&self, source: &str) -> Result<Vec<ProductRecord>, LoadError> {
            Err(LoadError::Io {
                location: source.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }
    }

    #[tokio::test]
    async fn test_not_ready_until_initialised() {
        let mut system = CatalogSystem::new(CatalogConfig::default()).unwrap();
        assert_eq!(system.state(), SystemState::Starting);
        assert_eq!(
            system.queries().err(),
            Some(CatalogError::initialization("catalog not initialised"))
        );

        let loader = StaticLoader::new(vec![
            ProductRecord::new("p1", "Alpha", 10.0),
            ProductRecord::new("p2", "Beta", -10.0),
        ]);
        let report = system.init(&loader).await.unwrap();

        assert!(system.is_ready());
        assert_eq!(report.loaded.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(
            system.products().unwrap().find_all().await.unwrap(),
            report.loaded
        );

        let err = system.init(&loader).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InitializationFailed);
        assert!(system.is_ready());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_unreadable_source_fails_the_system() {
        let mut system = CatalogSystem::new(CatalogConfig::default()).unwrap();

        let err = system.init(&BrokenLoader).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InitializationFailed);
        assert!(!err.is_client_error());
        assert_eq!(system.state(), SystemState::Failed);
        assert!(system.products().is_err());
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_config_is_an_initialisation_failure() {
        let config = CatalogConfig {
            channel_capacity: 0,
            ..CatalogConfig::default()
        };
        let err = CatalogSystem::new(config).err().unwrap();
        assert_eq!(
            err,
            CatalogError::initialization("channel capacity must be at least 1")
        );
    }
}
