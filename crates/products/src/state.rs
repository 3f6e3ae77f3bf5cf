//! Application state shared by all request handlers.

use std::sync::Arc;

use products_core::storage::ProductStore;

use crate::service::ProductService;
#[cfg(test)]
use crate::storage::InMemoryStore;

/// Shared application state.
///
/// Cloned for each request handler; the service and its store client are
/// shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductService>,
}

impl AppState {
    /// Creates a new AppState on top of the given store.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            products: Arc::new(ProductService::new(store)),
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    /// In-memory state for tests; the collection is bootstrapped on first use.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }
}
