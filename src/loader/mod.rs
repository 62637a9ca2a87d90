//! # Bulk Loading
//!
//! Populates the catalog at startup. A [`BulkLoader`] produces raw [`ProductRecord`]s
//! from a source; [`partition_records`] splits them into products ready to store and
//! records to skip, each skip carrying the reason.
//!
//! Loading is best-effort per record but all-or-nothing per source: a bad record is
//! skipped and logged, while an unreadable or malformed source fails the whole load.

pub mod report;
pub mod source;

pub use report::*;
pub use source::*;

use crate::model::ProductRecord;
use async_trait::async_trait;
use thiserror::Error;

/// A source that can no longer be read or parsed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {location}: {source}")]
    Io {
        location: String,
        source: std::io::Error,
    },

    #[error("Malformed product data in {location}: {source}")]
    Malformed {
        location: String,
        source: serde_json::Error,
    },
}

/// Produces the records for an initial load.
#[async_trait]
pub trait BulkLoader: Send + Sync {
    /// Reads every record from `source`. Records are returned unvalidated.
    ///
    /// # Errors
    /// A [`LoadError`] if the source as a whole cannot be read or decoded.
    async fn load(&self, source: &str) -> Result<Vec<ProductRecord>, LoadError>;
}
