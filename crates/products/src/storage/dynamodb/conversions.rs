//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! products. These are testable in isolation without DynamoDB access.
//!
//! Attribute names are lowercase on both the write and the read path.

use std::collections::HashMap;
use std::str::FromStr;

use aws_sdk_dynamodb::types::AttributeValue;
use products_core::product::{Product, ProductFields};
use products_core::storage::RepositoryError;
use rust_decimal::Decimal;

pub const ATTR_ID: &str = "id";
pub const ATTR_NAME: &str = "name";
pub const ATTR_PRICE: &str = "price";
pub const ATTR_DESCRIPTION: &str = "description";
pub const ATTR_STOCK: &str = "stock";

/// Builds the key map addressing a single product.
pub fn product_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(ATTR_ID.to_string(), AttributeValue::S(id.to_string()))])
}

/// Convert a Product to a DynamoDB item.
pub fn product_to_item(product: &Product) -> HashMap<String, AttributeValue> {
    let mut item = product_key(&product.id);

    item.insert(
        ATTR_NAME.to_string(),
        AttributeValue::S(product.name.clone()),
    );
    item.insert(ATTR_PRICE.to_string(), price_to_attribute(product.price));
    item.insert(
        ATTR_DESCRIPTION.to_string(),
        AttributeValue::S(product.description.clone()),
    );
    item.insert(ATTR_STOCK.to_string(), stock_to_attribute(product.stock));

    item
}

/// Convert a DynamoDB item to a Product.
pub fn item_to_product(
    item: &HashMap<String, AttributeValue>,
) -> Result<Product, RepositoryError> {
    Ok(Product {
        id: get_string(item, ATTR_ID)?,
        name: get_string(item, ATTR_NAME)?,
        price: get_decimal(item, ATTR_PRICE)?,
        description: get_string(item, ATTR_DESCRIPTION)?,
        stock: get_i32(item, ATTR_STOCK)?,
    })
}

/// Expression attribute values for an update of all mutable fields.
///
/// The placeholders match [`UPDATE_EXPRESSION`].
pub fn fields_to_update_values(fields: &ProductFields) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (":name".to_string(), AttributeValue::S(fields.name.clone())),
        (":price".to_string(), price_to_attribute(fields.price)),
        (
            ":description".to_string(),
            AttributeValue::S(fields.description.clone()),
        ),
        (":stock".to_string(), stock_to_attribute(fields.stock)),
    ])
}

/// `name` is a DynamoDB reserved word, so every attribute goes through a
/// name placeholder.
pub const UPDATE_EXPRESSION: &str =
    "SET #name = :name, #price = :price, #description = :description, #stock = :stock";

/// Expression attribute names for [`UPDATE_EXPRESSION`] and the existence
/// condition.
pub fn update_attribute_names() -> HashMap<String, String> {
    [ATTR_ID, ATTR_NAME, ATTR_PRICE, ATTR_DESCRIPTION, ATTR_STOCK]
        .into_iter()
        .map(|attr| (format!("#{attr}"), attr.to_string()))
        .collect()
}

fn price_to_attribute(price: Decimal) -> AttributeValue {
    AttributeValue::N(price.to_string())
}

fn stock_to_attribute(stock: i32) -> AttributeValue {
    AttributeValue::N(stock.to_string())
}

// ============================================================================
// Helper functions
// ============================================================================

fn get_attribute<'a>(
    item: &'a HashMap<String, AttributeValue>,
    key: &str,
) -> Result<&'a AttributeValue, RepositoryError> {
    item.get(key)
        .ok_or_else(|| RepositoryError::Serialization(format!("missing attribute '{key}'")))
}

/// Get a required string-typed attribute.
pub fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    get_attribute(item, key)?
        .as_s()
        .cloned()
        .map_err(|_| RepositoryError::Serialization(format!("attribute '{key}' is not a string")))
}

/// Get a required number-typed attribute as its raw decimal string.
pub fn get_number<'a>(
    item: &'a HashMap<String, AttributeValue>,
    key: &str,
) -> Result<&'a str, RepositoryError> {
    get_attribute(item, key)?
        .as_n()
        .map(String::as_str)
        .map_err(|_| RepositoryError::Serialization(format!("attribute '{key}' is not a number")))
}

fn get_decimal(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Decimal, RepositoryError> {
    let raw = get_number(item, key)?;
    Decimal::from_str(raw).map_err(|e| {
        RepositoryError::Serialization(format!("invalid decimal '{raw}' for '{key}': {e}"))
    })
}

fn get_i32(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i32, RepositoryError> {
    let raw = get_number(item, key)?;
    raw.parse().map_err(|e| {
        RepositoryError::Serialization(format!("invalid integer '{raw}' for '{key}': {e}"))
    })
}
