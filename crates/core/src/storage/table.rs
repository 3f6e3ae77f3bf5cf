//! Products collection schema (pure data, no I/O).

/// Default name of the products collection.
pub const PRODUCTS_TABLE_NAME: &str = "Products";

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub throughput: ProvisionedThroughput,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// Scalar attribute types usable as keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Provisioned read/write capacity for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionedThroughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the canonical products table configuration: a single string
/// partition key `id` and minimal provisioned capacity.
pub fn products_table_config() -> TableConfig {
    TableConfig {
        table_name: PRODUCTS_TABLE_NAME.to_string(),
        partition_key: KeyAttribute {
            name: "id".to_string(),
            attribute_type: AttributeType::String,
        },
        throughput: ProvisionedThroughput {
            read_capacity_units: 1,
            write_capacity_units: 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_table_config() {
        let config = products_table_config();

        assert_eq!(config.table_name, "Products");
        assert_eq!(config.partition_key.name, "id");
        assert_eq!(config.partition_key.attribute_type, AttributeType::String);
        assert_eq!(config.throughput.read_capacity_units, 1);
        assert_eq!(config.throughput.write_capacity_units, 1);
    }

    #[test]
    fn test_with_table_name() {
        let config = products_table_config().with_table_name("ProductsTest");
        assert_eq!(config.table_name, "ProductsTest");
        assert_eq!(config.partition_key.name, "id");
    }
}
