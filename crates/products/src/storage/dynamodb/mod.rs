//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `ProductStore`
//! using `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod repository;
mod table;

pub use repository::DynamoDbStore;
