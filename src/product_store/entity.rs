//! [`ActorEntity`] implementation that lets a [`ResourceActor`](crate::framework::ResourceActor)
//! keep [`Product`] values.
//!
//! The validation hook enforces shape *and* range, so the actor refuses any write that
//! would leave an out-of-range product in the store, whichever path it came from.

use crate::framework::ActorEntity;
use crate::model::{mapper, Product};
use crate::product_store::CatalogError;

impl ActorEntity for Product {
    type Id = String;
    type Error = CatalogError;

    fn id(&self) -> &String {
        self.key()
    }

    fn with_id(self, id: String) -> Self {
        Product::with_id(self, id)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        mapper::check_shape(Product::id(self), self.name())?;
        mapper::check_range(self)
    }
}
