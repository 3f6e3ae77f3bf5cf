//! DynamoDB product store.
//!
//! Implements `ProductStore` from `products_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use products_core::product::{seed_products, Product, ProductFields};
use products_core::storage::{products_table_config, ProductStore, Result, TableConfig};

use super::conversions::{
    fields_to_update_values, item_to_product, product_key, product_to_item,
    update_attribute_names, UPDATE_EXPRESSION,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};
use super::table::{create_table, table_exists, wait_for_table_active, CreateOutcome};
use crate::config::Config;

/// Access key and secret used against local endpoints such as LocalStack.
const LOCAL_CREDENTIAL: &str = "test";

/// DynamoDB-backed product store.
///
/// Holds a long-lived SDK client; cloning the store shares the client.
#[derive(Clone)]
pub struct DynamoDbStore {
    client: Client,
    table: TableConfig,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl AsRef<str>) -> Self {
        Self {
            client,
            table: products_table_config().with_table_name(table_name.as_ref()),
        }
    }

    /// Creates a new store from the application configuration.
    ///
    /// Credentials come from the AWS SDK default provider chain. A custom
    /// endpoint (LocalStack, DynamoDB Local) is used when configured, with
    /// static `test`/`test` credentials unless the environment provides keys.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()));

        if let Some(endpoint) = &config.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        if config.static_credentials {
            loader = loader.credentials_provider(Credentials::new(
                LOCAL_CREDENTIAL,
                LOCAL_CREDENTIAL,
                None,
                None,
                "products-local",
            ));
        }

        let sdk_config = loader.load().await;
        tracing::info!(target_store = %config.target_display(), table = %config.table_name, "Configured DynamoDB client");

        Self::new(Client::new(&sdk_config), &config.table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table.table_name
    }
}

#[async_trait]
impl ProductStore for DynamoDbStore {
    async fn put(&self, product: &Product) -> Result<()> {
        self.client
            .put_item()
            .table_name(self.table_name())
            .set_item(Some(product_to_item(product)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Product>> {
        let result = self
            .client
            .get_item()
            .table_name(self.table_name())
            .set_key(Some(product_key(id)))
            .consistent_read(true)
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) if !item.is_empty() => Ok(Some(item_to_product(&item)?)),
            _ => Ok(None),
        }
    }

    async fn update(&self, id: &str, fields: &ProductFields) -> Result<()> {
        self.client
            .update_item()
            .table_name(self.table_name())
            .set_key(Some(product_key(id)))
            .update_expression(UPDATE_EXPRESSION)
            .condition_expression("attribute_exists(#id)")
            .set_expression_attribute_names(Some(update_attribute_names()))
            .set_expression_attribute_values(Some(fields_to_update_values(fields)))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, id))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(self.table_name())
            .set_key(Some(product_key(id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Product>> {
        let mut products = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        // A single Scan call stops at 1 MB; follow the pages to read everything.
        loop {
            let result = self
                .client
                .scan()
                .table_name(self.table_name())
                .consistent_read(true)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in result.items.unwrap_or_default() {
                products.push(item_to_product(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => return Ok(products),
            }
        }
    }

    async fn collection_exists(&self) -> Result<bool> {
        table_exists(&self.client, self.table_name()).await
    }

    async fn ensure_collection_exists(&self) -> Result<()> {
        // A listed table may still be CREATING; item calls fail until ACTIVE.
        if self.collection_exists().await? {
            return wait_for_table_active(&self.client, self.table_name()).await;
        }

        tracing::info!(table = %self.table_name(), "Products table not found, creating it");

        let outcome = create_table(&self.client, &self.table).await?;
        wait_for_table_active(&self.client, self.table_name()).await?;

        if outcome == CreateOutcome::AlreadyInUse {
            tracing::info!(table = %self.table_name(), "Products table created concurrently, skipping seed");
            return Ok(());
        }

        let seeds = seed_products();
        for product in &seeds {
            self.put(product).await?;
        }

        tracing::info!(table = %self.table_name(), seeded = seeds.len(), "Created products table");
        Ok(())
    }
}
