//! Conversion between [`ProductRecord`] and [`Product`], plus the two validation passes.
//!
//! - *Shape* validation ([`check_shape`]): identifier and name present and non-blank.
//!   [`to_entity`] fails on it.
//! - *Range* validation ([`check_range`]): price ≥ 0 and rating absent or in `[0, 5]`.
//!   [`is_valid_for_storage`] is the soft form. Bulk load skips a record on the hard
//!   form's error so the skip carries a reason; write paths return that error.
//!
//! Everything here is pure.

use crate::model::{Product, ProductRecord};
use crate::product_store::CatalogError;

/// Highest permitted rating.
pub const MAX_RATING: f64 = 5.0;

/// Converts a transfer record into an entity, checking shape only.
pub fn to_entity(record: &ProductRecord) -> Result<Product, CatalogError> {
    let id = required("id", record.id.as_deref())?;
    let name = required("name", record.name.as_deref())?;

    let product = Product::new(id, name, record.price)?
        .with_optional_rating(record.rating)
        .with_details(record.image_url.clone(), record.description.clone())
        .with_specifications(record.specifications.clone().unwrap_or_default());
    Ok(product)
}

/// Converts an entity into its transfer shape. Total.
pub fn to_record(product: &Product) -> ProductRecord {
    ProductRecord {
        id: Some(product.id().to_string()),
        name: Some(product.name().to_string()),
        image_url: product.image_url().map(str::to_string),
        description: product.description().map(str::to_string),
        price: product.price(),
        rating: product.rating(),
        specifications: Some(product.specifications().clone()),
    }
}

/// True iff price and rating are within bounds.
pub fn is_valid_for_storage(product: &Product) -> bool {
    check_range(product).is_ok()
}

/// Hard form of [`is_valid_for_storage`].
pub fn check_range(product: &Product) -> Result<(), CatalogError> {
    let price = product.price();
    // Written as a negation so NaN is rejected too.
    if !(price >= 0.0) {
        return Err(CatalogError::validation(
            "price",
            format!("must be a non-negative number, got {price}"),
        ));
    }
    if let Some(rating) = product.rating() {
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(CatalogError::validation(
                "rating",
                format!("must be between 0 and {MAX_RATING}, got {rating}"),
            ));
        }
    }
    Ok(())
}

/// Rejects a blank identifier or name.
pub fn check_shape(id: &str, name: &str) -> Result<(), CatalogError> {
    required("id", Some(id))?;
    required("name", Some(name))?;
    Ok(())
}

fn required<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, CatalogError> {
    match value {
        None => Err(CatalogError::validation(field, "is required")),
        Some(v) if v.trim().is_empty() => Err(CatalogError::validation(field, "must not be blank")),
        Some(v) => Ok(v),
    }
}

impl TryFrom<&ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: &ProductRecord) -> Result<Self, Self::Error> {
        to_entity(record)
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        to_record(product)
    }
}
