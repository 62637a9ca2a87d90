//! Concrete [`BulkLoader`]s.

use crate::loader::{BulkLoader, LoadError};
use crate::model::ProductRecord;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Reads a JSON array of product records from a file.
///
/// Field names are camelCase (`id`, `name`, `imageUrl`, `description`, `price`, `rating`,
/// `specifications`). A missing `price` reads as `0` and missing `specifications` as none.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileLoader;

#[async_trait]
impl BulkLoader for JsonFileLoader {
    #[instrument(skip(self))]
    async fn load(&self, source: &str) -> Result<Vec<ProductRecord>, LoadError> {
        let bytes = tokio::fs::read(source).await.map_err(|e| LoadError::Io {
            location: source.to_string(),
            source: e,
        })?;
        let records: Vec<ProductRecord> =
            serde_json::from_slice(&bytes).map_err(|e| LoadError::Malformed {
                location: source.to_string(),
                source: e,
            })?;
        debug!(count = records.len(), "Records read");
        Ok(records)
    }
}

/// Serves a fixed list of records, whatever source is asked for.
#[derive(Debug, Clone, Default)]
pub struct StaticLoader {
    records: Vec<ProductRecord>,
}

impl StaticLoader {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl BulkLoader for StaticLoader {
    async fn load(&self, _source: &str) -> Result<Vec<ProductRecord>, LoadError> {
        Ok(self.records.clone())
    }
}
