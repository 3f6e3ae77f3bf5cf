mod error;
mod http_mapping;
mod table;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use table::{
    products_table_config, AttributeType, KeyAttribute, ProvisionedThroughput, TableConfig,
    PRODUCTS_TABLE_NAME,
};
pub use traits::ProductStore;
