//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter that hides the
//! module prefix (`with_target(false)`); the store actor tags its events with
//! `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: start and shutdown at `info`, with the final store size
//! - **Store requests**: every request at `debug`, mutations at `info`, rejected writes at `warn`
//! - **Queries**: `#[instrument]` spans carrying the query parameters
//! - **Bulk load**: one `warn` per skipped record with its index, id and reason
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default filter comes from CATALOG_LOG, else "info")
//! cargo run
//!
//! # RUST_LOG wins over the configured filter
//! RUST_LOG=debug cargo run
//! RUST_LOG=catalog_store::query=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a create followed by a lookup reads roughly:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! DEBUG Request entity_type="Product" operation=save
//! INFO Created entity_type="Product" id=p1 size=1
//! DEBUG Request entity_type="Product" operation=read
//! DEBUG Get entity_type="Product" id=p1 found=true
//! ```
//!
//! The actor runs in its own task, so its events do not nest under the caller's spans.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` takes precedence over `default_filter`.
///
/// Call once, at process start.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
