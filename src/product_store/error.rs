//! Error type for the catalog.

use crate::framework::Operation;
use thiserror::Error;

/// Result alias used throughout the catalog.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Every failure the catalog can report.
///
/// One enum with structured payloads rather than a type per failure; use
/// [`CatalogError::kind`] to switch on the kind at a boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested product does not exist.
    #[error("Product not found: {id}")]
    NotFound { id: String },

    /// A create collided with an existing identifier.
    #[error("Product already exists: {id}")]
    AlreadyExists { id: String },

    /// A write violated a shape or range invariant.
    #[error("Invalid `{field}`: {reason}")]
    ValidationFailed { field: String, reason: String },

    /// The category matches no known category.
    #[error("Category not found: {category}")]
    CategoryNotFound { category: String },

    #[error("Invalid parameter `{name}` ({value:?}): {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Invalid price range [{min}, {max}]: bounds must be non-negative and min <= max")]
    InvalidPriceRange { min: f64, max: f64 },

    #[error("Invalid minimum rating {min}: must be between 0 and 5")]
    InvalidRating { min: f64 },

    /// The store could not carry out the request at all.
    #[error("Store {operation} failed for {id}: {cause}")]
    StoreFault {
        operation: Operation,
        id: String,
        cause: String,
    },

    /// The bulk data source could not be read; the catalog is not usable.
    #[error("Catalog initialization failed: {cause}")]
    InitializationFailed { cause: String },
}

/// Field-less discriminant of [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    ValidationFailed,
    CategoryNotFound,
    InvalidParameter,
    InvalidPriceRange,
    InvalidRating,
    StoreFault,
    InitializationFailed,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::ValidationFailed { .. } => ErrorKind::ValidationFailed,
            Self::CategoryNotFound { .. } => ErrorKind::CategoryNotFound,
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Self::InvalidPriceRange { .. } => ErrorKind::InvalidPriceRange,
            Self::InvalidRating { .. } => ErrorKind::InvalidRating,
            Self::StoreFault { .. } => ErrorKind::StoreFault,
            Self::InitializationFailed { .. } => ErrorKind::InitializationFailed,
        }
    }

    /// Caused by the caller's input or the current contents, not by infrastructure.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self.kind(),
            ErrorKind::StoreFault | ErrorKind::InitializationFailed
        )
    }

    /// Worth retrying unchanged.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::StoreFault
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_parameter(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn initialization(cause: impl ToString) -> Self {
        Self::InitializationFailed {
            cause: cause.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_infrastructure_kinds_are_not_client_errors() {
        let fault = CatalogError::StoreFault {
            operation: Operation::Save,
            id: "p1".into(),
            cause: "Actor closed".into(),
        };
        assert!(!fault.is_client_error());
        assert!(fault.is_retryable());

        let init = CatalogError::initialization("unreadable");
        assert!(!init.is_client_error());
        assert!(!init.is_retryable());

        for err in [
            CatalogError::not_found("p1"),
            CatalogError::AlreadyExists { id: "p1".into() },
            CatalogError::validation("price", "negative"),
            CatalogError::CategoryNotFound {
                category: "Desktops".into(),
            },
            CatalogError::invalid_parameter("limit", 0, "out of range"),
            CatalogError::InvalidPriceRange {
                min: 200.0,
                max: 100.0,
            },
            CatalogError::InvalidRating { min: 6.0 },
        ] {
            assert!(err.is_client_error(), "{err}");
            assert!(!err.is_retryable(), "{err}");
        }
    }

    #[test]
    fn test_messages_carry_payload() {
        let fault = CatalogError::StoreFault {
            operation: Operation::Delete,
            id: "p9".into(),
            cause: "Actor dropped response channel".into(),
        };
        assert_eq!(
            fault.to_string(),
            "Store delete failed for p9: Actor dropped response channel"
        );
        assert_eq!(
            CatalogError::invalid_parameter("query", "  ", "must not be blank").to_string(),
            "Invalid parameter `query` (\"  \"): must not be blank"
        );
    }
}
