//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of `ProductStore` that
//! keeps the collection in a HashMap wrapped in `Arc<RwLock<_>>`. It mirrors
//! the DynamoDB backend's observable behavior, including a collection that
//! does not exist until it is bootstrapped, and is used by the tests and for
//! local development without a store endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use products::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! store.ensure_collection_exists().await?;
//! ```

mod repository;

pub use repository::InMemoryStore;
