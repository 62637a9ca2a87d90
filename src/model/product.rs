//! The catalog's domain entity.

use crate::model::mapper;
use crate::product_store::CatalogError;
use std::collections::BTreeMap;

/// Specification key holding a product's category.
pub const CATEGORY_KEY: &str = "category";

/// An immutable, validated product.
///
/// Fields are private: a `Product` can only be built through [`Product::new`], which
/// rejects a blank identifier or name, and "changed" through the `with_*` methods, each of
/// which consumes the value and returns a new one. Price and rating bounds are *not*
/// checked here (see [`mapper::is_valid_for_storage`]); the store enforces them on write.
///
/// # Example
/// ```
/// use catalog_store::model::Product;
///
/// let laptop = Product::new("p1", "ThinkPad X1", 1499.0)?
///     .with_rating(4.6)
///     .with_specification("category", "Laptops");
/// assert_eq!(laptop.category(), Some("Laptops"));
/// # Ok::<(), catalog_store::product_store::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    image_url: Option<String>,
    description: Option<String>,
    price: f64,
    rating: Option<f64>,
    specifications: BTreeMap<String, String>,
}

impl Product {
    /// Creates a product with no image, description, rating or specifications.
    ///
    /// # Errors
    /// `ValidationFailed` if `id` or `name` is blank after trimming.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        let name = name.into();
        mapper::check_shape(&id, &name)?;
        Ok(Self {
            id,
            name,
            image_url: None,
            description: None,
            price,
            rating: None,
            specifications: BTreeMap::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn key(&self) -> &String {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    pub fn specifications(&self) -> &BTreeMap<String, String> {
        &self.specifications
    }

    /// Looks up a specification value. Keys are case-sensitive.
    pub fn specification(&self, key: &str) -> Option<&str> {
        self.specifications.get(key).map(String::as_str)
    }

    pub fn category(&self) -> Option<&str> {
        self.specification(CATEGORY_KEY)
    }

    /// Rebinds the product to another identifier. Not validated; the store re-checks shape
    /// after forcing the key.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_price(self, price: f64) -> Self {
        Self { price, ..self }
    }

    pub fn with_rating(self, rating: f64) -> Self {
        self.with_optional_rating(Some(rating))
    }

    pub fn with_optional_rating(self, rating: Option<f64>) -> Self {
        Self { rating, ..self }
    }

    pub fn with_image_url(self, image_url: impl Into<String>) -> Self {
        Self {
            image_url: Some(image_url.into()),
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    pub fn with_specification(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.insert(key.into(), value.into());
        self
    }

    pub fn with_specifications(self, specifications: BTreeMap<String, String>) -> Self {
        Self {
            specifications,
            ..self
        }
    }

    // Used by the mapper, which carries optional fields straight across.
    pub(crate) fn with_details(self, image_url: Option<String>, description: Option<String>) -> Self {
        Self {
            image_url,
            description,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_store::ErrorKind;

    #[test]
    fn test_new_rejects_blank_identity() {
        let err = Product::new("  ", "Mouse", 10.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
        assert!(matches!(err, CatalogError::ValidationFailed { ref field, .. } if field == "id"));

        let err = Product::new("p1", "", 10.0).unwrap_err();
        assert!(matches!(err, CatalogError::ValidationFailed { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_with_methods_produce_new_values() {
        let original = Product::new("p1", "Mouse", 10.0).unwrap();
        let changed = original.clone().with_price(12.5).with_rating(4.0);

        assert_eq!(original.price(), 10.0);
        assert_eq!(original.rating(), None);
        assert_eq!(changed.price(), 12.5);
        assert_eq!(changed.rating(), Some(4.0));
        assert_eq!(changed.id(), "p1");
    }

    #[test]
    fn test_specification_keys_are_case_sensitive() {
        let product = Product::new("p1", "Mouse", 10.0)
            .unwrap()
            .with_specification("category", "Mice");

        assert_eq!(product.category(), Some("Mice"));
        assert_eq!(product.specification("Category"), None);
    }
}
