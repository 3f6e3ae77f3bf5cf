//! In-memory product store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use products_core::product::{seed_products, Product, ProductFields};
use products_core::storage::{ProductStore, RepositoryError, Result};

type Collection = HashMap<String, Product>;

/// In-memory storage backend.
///
/// `None` stands for a collection that has not been created yet; every
/// item operation on it fails the way a missing DynamoDB table does.
/// Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    collection: Arc<RwLock<Option<Collection>>>,
}

impl InMemoryStore {
    /// Creates a store whose collection does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with an existing, empty collection (no fixtures).
    #[cfg(test)]
    pub fn with_empty_collection() -> Self {
        Self {
            collection: Arc::new(RwLock::new(Some(HashMap::new()))),
        }
    }
}

fn table_not_found() -> RepositoryError {
    RepositoryError::QueryFailed("Table not found".to_string())
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn put(&self, product: &Product) -> Result<()> {
        let mut guard = self.collection.write().await;
        let collection = guard.as_mut().ok_or_else(table_not_found)?;
        collection.insert(product.id.clone(), product.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Product>> {
        let guard = self.collection.read().await;
        let collection = guard.as_ref().ok_or_else(table_not_found)?;
        Ok(collection.get(id).cloned())
    }

    async fn update(&self, id: &str, fields: &ProductFields) -> Result<()> {
        let mut guard = self.collection.write().await;
        let collection = guard.as_mut().ok_or_else(table_not_found)?;

        let product = collection
            .get_mut(id)
            .ok_or_else(|| RepositoryError::product_not_found(id))?;
        *product = product.with_fields(fields.clone());

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut guard = self.collection.write().await;
        let collection = guard.as_mut().ok_or_else(table_not_found)?;
        collection.remove(id);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Product>> {
        let guard = self.collection.read().await;
        let collection = guard.as_ref().ok_or_else(table_not_found)?;
        Ok(collection.values().cloned().collect())
    }

    async fn collection_exists(&self) -> Result<bool> {
        Ok(self.collection.read().await.is_some())
    }

    async fn ensure_collection_exists(&self) -> Result<()> {
        let mut guard = self.collection.write().await;
        if guard.is_none() {
            let seeded = seed_products()
                .into_iter()
                .map(|product| (product.id.clone(), product))
                .collect();
            *guard = Some(seeded);
            tracing::info!("Created in-memory products collection");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_product(id: &str) -> Product {
        Product::new(id, "Widget", dec!(4.25), "A widget", 3)
    }

    #[tokio::test]
    async fn test_operations_fail_before_bootstrap() {
        let store = InMemoryStore::new();

        assert!(!store.collection_exists().await.unwrap());
        assert_eq!(store.get("1").await.unwrap_err(), table_not_found());
        assert_eq!(store.scan().await.unwrap_err(), table_not_found());
        assert_eq!(
            store.put(&sample_product("1")).await.unwrap_err(),
            table_not_found()
        );
    }

    #[tokio::test]
    async fn test_bootstrap_seeds_fixtures_once() {
        let store = InMemoryStore::new();
        store.ensure_collection_exists().await.unwrap();
        store.delete("1").await.unwrap();

        // A second bootstrap must not re-seed an existing collection.
        store.ensure_collection_exists().await.unwrap();

        let products = store.scan().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "2");
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = InMemoryStore::with_empty_collection();
        store.put(&sample_product("a")).await.unwrap();

        let mut replacement = sample_product("a");
        replacement.stock = 99;
        store.put(&replacement).await.unwrap();

        assert_eq!(store.get("a").await.unwrap(), Some(replacement));
        assert_eq!(store.scan().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_does_not_create() {
        let store = InMemoryStore::with_empty_collection();
        let fields = sample_product("x").fields();

        let err = store.update("x", &fields).await.unwrap_err();
        assert_eq!(err, RepositoryError::product_not_found("x"));
        assert_eq!(store.get("x").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_absent_is_ok() {
        let store = InMemoryStore::with_empty_collection();
        assert!(store.delete("missing").await.is_ok());
    }
}
