//! Catalog queries: search, filters, sorting, top-N, comparison and specification lookup,
//! plus validated create/update/delete paths.

pub mod engine;
pub mod params;

pub use engine::QueryEngine;
pub use params::{SortOrder, MAX_COMPARE_IDS, MAX_TOP_RATED};
