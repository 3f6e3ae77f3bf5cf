use async_trait::async_trait;

use crate::product::{Product, ProductFields};

use super::Result;

/// Access to the products collection of a key-value store.
///
/// Implementations translate between [`Product`] and the store's native item
/// format. None of the write operations check for prior existence on their
/// own; callers that need create-must-not-exist semantics check first.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Writes a full product, overwriting any item with the same `id`.
    async fn put(&self, product: &Product) -> Result<()>;

    /// Gets a product by its `id`. Returns `None` when no item has that key.
    async fn get(&self, id: &str) -> Result<Option<Product>>;

    /// Replaces name, price, description and stock of an existing product.
    ///
    /// Never creates an item: an absent `id` yields `RepositoryError::NotFound`.
    async fn update(&self, id: &str, fields: &ProductFields) -> Result<()>;

    /// Deletes a product. Deleting an absent `id` succeeds.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Reads every product in the collection, in store order.
    async fn scan(&self) -> Result<Vec<Product>>;

    /// Returns whether the products collection exists.
    async fn collection_exists(&self) -> Result<bool>;

    /// Creates the collection and seeds it with fixtures if it does not exist.
    async fn ensure_collection_exists(&self) -> Result<()>;
}
