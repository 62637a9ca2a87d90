//! Startup, configuration and shutdown of the catalog.

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use catalog_system::{CatalogSystem, SystemState};
pub use config::{CatalogConfig, ConfigError};
