//! # Product Store
//!
//! The authoritative, concurrency-safe collection of [`Product`]s: a
//! [`ResourceActor<Product>`] plus the catalog's error taxonomy.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`CatalogError`] and its [`ErrorKind`] discriminant
//! - [`new()`] - Factory that creates the actor and its [`ProductClient`]
//!
//! ## Usage
//!
//! ```rust
//! use catalog_store::model::Product;
//! use catalog_store::product_store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, products) = product_store::new(32);
//!     tokio::spawn(actor.run());
//!
//!     products.save(Product::new("p1", "Alpha", 50.0)?.with_rating(4.0)).await?;
//!     assert!(products.find_by_id("p1").await?.is_some());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new Product actor and its client. Spawn `actor.run()` before using the client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
