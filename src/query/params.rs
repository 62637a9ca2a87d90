//! Parameter checks shared by the query operations. Each one runs before the store is
//! touched.

use crate::model::mapper::MAX_RATING;
use crate::product_store::{CatalogError, CatalogResult};
use std::ops::RangeInclusive;

/// Most ids accepted by a single comparison.
pub const MAX_COMPARE_IDS: usize = 10;

/// Largest `limit` accepted by top-rated.
pub const MAX_TOP_RATED: usize = 100;

/// Direction for the sort operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

/// `InvalidParameter` if `value` is empty or only whitespace. The value itself is
/// matched as given.
pub fn non_blank(name: &str, value: &str) -> CatalogResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid_parameter(
            name,
            value,
            "must not be blank",
        ));
    }
    Ok(())
}

pub fn price_range(min: f64, max: f64) -> CatalogResult<()> {
    // Negated comparisons so NaN bounds are rejected.
    if !(min >= 0.0) || !(max >= 0.0) || !(min <= max) {
        return Err(CatalogError::InvalidPriceRange { min, max });
    }
    Ok(())
}

pub fn min_rating(min: f64) -> CatalogResult<()> {
    if !(0.0..=MAX_RATING).contains(&min) {
        return Err(CatalogError::InvalidRating { min });
    }
    Ok(())
}

pub fn count_within(name: &str, value: usize, allowed: RangeInclusive<usize>) -> CatalogResult<()> {
    if !allowed.contains(&value) {
        return Err(CatalogError::invalid_parameter(
            name,
            value,
            format!("must be between {} and {}", allowed.start(), allowed.end()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_store::ErrorKind;

    #[test]
    fn test_non_blank_only_rejects_whitespace() {
        assert!(non_blank("query", "  lap ").is_ok());
        let err = non_blank("query", " \n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_price_range_bounds() {
        assert!(price_range(0.0, 0.0).is_ok());
        assert!(price_range(100.0, 100.0).is_ok());
        assert_eq!(
            price_range(200.0, 100.0),
            Err(CatalogError::InvalidPriceRange {
                min: 200.0,
                max: 100.0
            })
        );
        assert!(price_range(-1.0, 10.0).is_err());
        assert!(price_range(0.0, -1.0).is_err());
        assert!(price_range(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_min_rating_bounds() {
        assert!(min_rating(0.0).is_ok());
        assert!(min_rating(5.0).is_ok());
        assert_eq!(min_rating(5.5), Err(CatalogError::InvalidRating { min: 5.5 }));
        assert!(min_rating(-0.5).is_err());
    }

    #[test]
    fn test_count_within_reports_bounds() {
        let err = count_within("limit", 101, 1..=MAX_TOP_RATED).unwrap_err();
        assert_eq!(
            err,
            CatalogError::invalid_parameter("limit", 101, "must be between 1 and 100")
        );
    }
}
