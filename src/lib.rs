//! # Catalog Store
//!
//! > **An in-memory product catalog behind a single-owner actor.**
//!
//! Products live in one concurrency-safe store and are read through a query layer that
//! validates every parameter before it touches the data. The catalog is populated once at
//! startup from a bulk source; bad records are skipped, not fatal.
//!
//! ## 🏗️ Design
//!
//! ### One owner for the data
//! The store is a generic [`ResourceActor`](framework::ResourceActor) running in its own
//! Tokio task. It owns the map outright and handles one request at a time, so
//! "insert if absent", "replace if present" and "remove if present" are atomic without
//! a lock. Callers hold a cheap, cloneable client and only ever see cloned snapshots.
//!
//! ### Immutable entities
//! A [`Product`](model::Product) cannot be changed in place. Every `with_*` method returns
//! a new value, and the only way to change what the store holds is to replace it.
//!
//! ### One error type
//! Everything fails with [`CatalogError`](product_store::CatalogError). Match on
//! [`kind()`](product_store::CatalogError::kind) to map errors at a boundary;
//! [`is_client_error()`](product_store::CatalogError::is_client_error) separates bad input
//! from infrastructure faults.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client, request messages and the [`mock`](framework::mock) test
//! double.
//!
//! ### 2. The Data ([`model`], [`product_store`])
//! The entity, its transfer record, the mapper that converts and validates between them,
//! and the store wiring for products.
//!
//! ### 3. The Interface ([`clients`], [`query`])
//! [`ProductClient`](clients::ProductClient) is the store's API;
//! [`QueryEngine`](query::QueryEngine) adds search, filters, sorting, comparison and the
//! validated write paths.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`loader`])
//! [`CatalogSystem`](lifecycle::CatalogSystem) starts the store, runs the bulk load and
//! shuts everything down.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Load data/products.json and run a few queries
//! cargo run
//!
//! # Point at another file, with debug logs
//! CATALOG_DATA_SOURCE=/tmp/products.json RUST_LOG=debug cargo run
//!
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod loader;
pub mod model;
pub mod product_store;
pub mod query;
