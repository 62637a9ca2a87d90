//! Catalog data model: the [`Product`] entity, its [`ProductRecord`] transfer shape and
//! the [`mapper`] between them.

pub mod mapper;
pub mod product;
pub mod record;

pub use product::*;
pub use record::*;
