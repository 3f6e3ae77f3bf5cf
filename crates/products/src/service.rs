//! Product service: existence checks and collection bootstrap on top of a
//! `ProductStore`.
//!
//! The existence checks are plain read-then-write sequences. Two concurrent
//! creates for the same `id` can both pass the check, and the last write wins.
//! Likewise `delete_all_products` leaves behind items written after its scan.

use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};
use tokio::task::JoinHandle;

use products_core::product::Product;
use products_core::storage::{ProductStore, RepositoryError, Result};

/// Orchestrates product operations against an injected store.
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    /// Set once the collection is confirmed to exist. It is never dropped
    /// by this service, so the fact needs no invalidation.
    collection_ready: OnceCell<()>,
    /// Bootstrap task still running after its caller went away.
    bootstrap: Mutex<Option<JoinHandle<Result<()>>>>,
}

impl ProductService {
    /// Creates a new service on top of the given store.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            store,
            collection_ready: OnceCell::new(),
            bootstrap: Mutex::new(None),
        }
    }

    /// Makes sure the collection exists, creating and seeding it if needed.
    ///
    /// Only the first successful call reaches the store. A failed attempt is
    /// not remembered, so the next operation tries again.
    ///
    /// The bootstrap runs on its own task. A caller that is cancelled (for
    /// example by the request timeout) leaves the task running, and the next
    /// caller waits for that same task instead of starting over.
    pub async fn ensure_collection(&self) -> Result<()> {
        self.collection_ready
            .get_or_try_init(|| async {
                let mut pending = self.bootstrap.lock().await;
                let task = pending.get_or_insert_with(|| {
                    let store = Arc::clone(&self.store);
                    tokio::spawn(async move { store.ensure_collection_exists().await })
                });

                let outcome = task.await;
                *pending = None;

                outcome.map_err(|e| {
                    RepositoryError::QueryFailed(format!("collection bootstrap task failed: {e}"))
                })??;
                tracing::debug!("Products collection confirmed");
                Ok::<(), RepositoryError>(())
            })
            .await?;
        Ok(())
    }

    /// Creates a product. Fails with `AlreadyExists` if the `id` is taken.
    ///
    /// The existence check and the write are separate store calls, so two
    /// concurrent creates of the same `id` can both succeed (last write wins).
    pub async fn create_product(&self, product: &Product) -> Result<()> {
        self.ensure_collection().await?;

        if self.store.get(&product.id).await?.is_some() {
            return Err(RepositoryError::product_already_exists(&product.id));
        }

        self.store.put(product).await?;
        tracing::info!(product_id = %product.id, name = %product.name, "Created product");
        Ok(())
    }

    /// Gets a product by `id`; `None` when it does not exist.
    pub async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        self.ensure_collection().await?;
        self.store.get(id).await
    }

    /// Lists every product. Order is unspecified.
    pub async fn get_products(&self) -> Result<Vec<Product>> {
        self.ensure_collection().await?;
        self.store.scan().await
    }

    /// Replaces every field except `id` of an existing product.
    ///
    /// The `id` inside `product` is ignored; the path `id` wins.
    pub async fn update_product(&self, id: &str, product: &Product) -> Result<()> {
        self.ensure_collection().await?;
        self.store.update(id, &product.fields()).await?;
        tracing::info!(product_id = %id, "Updated product");
        Ok(())
    }

    /// Deletes a product. Deleting an absent `id` is not an error.
    pub async fn delete_product(&self, id: &str) -> Result<()> {
        self.store.delete(id).await?;
        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }

    /// Deletes every product one at a time and returns how many were deleted.
    pub async fn delete_all_products(&self) -> Result<usize> {
        let products = self.get_products().await?;
        for product in &products {
            self.store.delete(&product.id).await?;
        }

        tracing::info!(deleted = products.len(), "Deleted all products");
        Ok(products.len())
    }

    /// Checks that the store answers; used by the readiness probe.
    pub async fn ready(&self) -> Result<bool> {
        self.store.collection_exists().await
    }
}
