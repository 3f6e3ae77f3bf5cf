//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `ProductStore`
//! trait defined in `products_core::storage`. The backend is selected at
//! startup with `--store` (or `PRODUCTS_STORE`).
//!
//! - `dynamodb` (default): AWS DynamoDB via `aws-sdk-dynamodb`
//! - `memory`: process-local store, for development and tests

use std::sync::Arc;

use products_core::storage::ProductStore;

use crate::config::{Config, StoreBackend};

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbStore;
pub use inmemory::InMemoryStore;

/// Builds the configured product store.
pub async fn connect(backend: StoreBackend, config: &Config) -> Arc<dyn ProductStore> {
    match backend {
        StoreBackend::Dynamodb => Arc::new(DynamoDbStore::from_config(config).await),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory product store, data will not be persisted");
            Arc::new(InMemoryStore::new())
        }
    }
}
