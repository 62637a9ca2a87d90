//! Splits a batch of records into storable products and skipped records.

use crate::model::{mapper, Product, ProductRecord};
use crate::product_store::CatalogError;
use std::collections::HashSet;

/// A record left out of the load, with its position in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub index: usize,
    pub record: ProductRecord,
    pub reason: CatalogError,
}

/// Outcome of a bulk load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub loaded: Vec<Product>,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    pub fn total(&self) -> usize {
        self.loaded.len() + self.skipped.len()
    }
}

/// Converts each record and keeps the ones that may be stored.
///
/// A record is skipped when it fails shape validation, fails range validation, or
/// repeats an id already accepted earlier in the batch. Source order is preserved in
/// both lists.
pub fn partition_records(records: Vec<ProductRecord>) -> LoadReport {
    let mut report = LoadReport::default();
    let mut seen = HashSet::new();

    for (index, record) in records.into_iter().enumerate() {
        let outcome = mapper::to_entity(&record).and_then(|product| {
            mapper::check_range(&product)?;
            if !seen.insert(product.id().to_string()) {
                return Err(CatalogError::AlreadyExists {
                    id: product.id().to_string(),
                });
            }
            Ok(product)
        });

        match outcome {
            Ok(product) => report.loaded.push(product),
            Err(reason) => report.skipped.push(SkippedRecord {
                index,
                record,
                reason,
            }),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_store::ErrorKind;

    #[test]
    fn test_partition_skips_each_kind_of_bad_record() {
        let records = vec![
            ProductRecord::new("p1", "Alpha", 10.0),
            ProductRecord::new("p2", "Beta", -1.0),
            ProductRecord::new("p3", "Gamma", 5.0).with_rating(7.5),
            ProductRecord {
                name: Some("No Id".into()),
                ..ProductRecord::default()
            },
            ProductRecord::new("p1", "Alpha again", 11.0),
            ProductRecord::new("p4", "Delta", 0.0).with_rating(5.0),
        ];

        let report = partition_records(records);

        let loaded: Vec<&str> = report.loaded.iter().map(Product::id).collect();
        assert_eq!(loaded, vec!["p1", "p4"]);
        assert_eq!(report.loaded[0].name(), "Alpha");

        let skipped: Vec<(usize, ErrorKind)> = report
            .skipped
            .iter()
            .map(|s| (s.index, s.reason.kind()))
            .collect();
        assert_eq!(
            skipped,
            vec![
                (1, ErrorKind::ValidationFailed),
                (2, ErrorKind::ValidationFailed),
                (3, ErrorKind::ValidationFailed),
                (4, ErrorKind::AlreadyExists),
            ]
        );
        assert_eq!(report.skipped[0].record.id.as_deref(), Some("p2"));
        assert_eq!(report.total(), 6);
    }

    #[test]
    fn test_partition_of_nothing_is_empty() {
        assert_eq!(partition_records(vec![]), LoadReport::default());
    }
}
