//! Products table bootstrap: existence check, creation and activation wait.

use std::time::Duration;

use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
    TableStatus,
};
use aws_sdk_dynamodb::Client;
use products_core::storage::{AttributeType, RepositoryError, Result, TableConfig};

use super::error::{map_create_table_error, map_describe_table_error, map_list_tables_error};

const ACTIVATION_ATTEMPTS: u32 = 60;
const ACTIVATION_DELAY: Duration = Duration::from_secs(2);

/// Outcome of a create-table request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// This call created the table.
    Created,
    /// The table was already being created by someone else.
    AlreadyInUse,
}

/// Returns whether `table_name` is listed, following ListTables pages.
pub async fn table_exists(client: &Client, table_name: &str) -> Result<bool> {
    let mut start_table_name: Option<String> = None;

    loop {
        let output = client
            .list_tables()
            .set_exclusive_start_table_name(start_table_name.take())
            .send()
            .await
            .map_err(map_list_tables_error)?;

        if output.table_names().iter().any(|name| name == table_name) {
            return Ok(true);
        }

        match output.last_evaluated_table_name {
            Some(name) => start_table_name = Some(name),
            None => return Ok(false),
        }
    }
}

/// Issues CreateTable for the given configuration.
pub async fn create_table(client: &Client, config: &TableConfig) -> Result<CreateOutcome> {
    let key_schema = KeySchemaElement::builder()
        .attribute_name(&config.partition_key.name)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

    let attribute_definition = AttributeDefinition::builder()
        .attribute_name(&config.partition_key.name)
        .attribute_type(to_scalar_type(&config.partition_key.attribute_type))
        .build()
        .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

    let throughput = ProvisionedThroughput::builder()
        .read_capacity_units(config.throughput.read_capacity_units)
        .write_capacity_units(config.throughput.write_capacity_units)
        .build()
        .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

    let result = client
        .create_table()
        .table_name(&config.table_name)
        .key_schema(key_schema)
        .attribute_definitions(attribute_definition)
        .provisioned_throughput(throughput)
        .send()
        .await;

    match result {
        Ok(_) => Ok(CreateOutcome::Created),
        Err(err)
            if matches!(
                err.as_service_error(),
                Some(CreateTableError::ResourceInUseException(_))
            ) =>
        {
            Ok(CreateOutcome::AlreadyInUse)
        }
        Err(err) => Err(map_create_table_error(err)),
    }
}

/// Polls DescribeTable until the table reports ACTIVE.
pub async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    for attempt in 0..ACTIVATION_ATTEMPTS {
        let output = client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(map_describe_table_error)?;

        let status = output.table().and_then(|table| table.table_status());
        if status == Some(&TableStatus::Active) {
            return Ok(());
        }

        tracing::debug!(table = %table_name, attempt, ?status, "Waiting for table to become active");
        tokio::time::sleep(ACTIVATION_DELAY).await;
    }

    Err(RepositoryError::QueryFailed(format!(
        "Timeout waiting for table '{table_name}' to become active"
    )))
}

fn to_scalar_type(attr_type: &AttributeType) -> ScalarAttributeType {
    match attr_type {
        AttributeType::String => ScalarAttributeType::S,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_key_maps_to_s() {
        assert_eq!(
            to_scalar_type(&AttributeType::String),
            ScalarAttributeType::S
        );
    }
}
