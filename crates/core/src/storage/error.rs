use thiserror::Error;

/// Errors that can occur during product store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// A create was attempted for an `id` that is already present.
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// A stored item could not be decoded into a domain record.
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Shorthand for a missing product.
    pub fn product_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Product",
            id: id.into(),
        }
    }

    /// Shorthand for a duplicate product create.
    pub fn product_already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type: "Product",
            id: id.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
