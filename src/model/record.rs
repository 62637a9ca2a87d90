//! Boundary-facing transfer record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Loosely-typed mirror of [`Product`](crate::model::Product) used for bulk load input
/// and serialized output.
///
/// Nothing here is validated; conversion through [`mapper::to_entity`](crate::model::mapper::to_entity)
/// is where invariants are checked. A missing `price` reads as `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
}

impl ProductRecord {
    /// A record carrying just the required fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            price,
            ..Self::default()
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_specification(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case_with_gaps() {
        let json = r#"{
            "id": "p1",
            "name": "Alpha",
            "imageUrl": "https://img.example/p1.png",
            "rating": 4.0,
            "specifications": { "category": "Laptops" }
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id.as_deref(), Some("p1"));
        assert_eq!(record.image_url.as_deref(), Some("https://img.example/p1.png"));
        assert_eq!(record.description, None);
        assert_eq!(record.price, 0.0);
        assert_eq!(
            record.specifications.unwrap().get("category").map(String::as_str),
            Some("Laptops")
        );
    }

    #[test]
    fn test_null_specifications_are_accepted() {
        let json = r#"{ "id": "p1", "name": "Alpha", "price": 5, "specifications": null }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.specifications, None);
        assert_eq!(record.price, 5.0);
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let value = serde_json::to_value(ProductRecord::new("p1", "Alpha", 50.0)).unwrap();
        assert_eq!(value, serde_json::json!({ "id": "p1", "name": "Alpha", "price": 50.0 }));
    }
}
