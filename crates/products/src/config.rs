use std::env;

use clap::ValueEnum;
use products_core::storage::PRODUCTS_TABLE_NAME;

/// Which `ProductStore` implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    /// AWS DynamoDB, or a compatible endpoint such as LocalStack.
    Dynamodb,
    /// Process-local store; data is lost on exit.
    Memory,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the products collection (default: "Products")
    pub table_name: String,
    /// Custom DynamoDB endpoint, e.g. "http://localhost:4566" for LocalStack
    pub aws_endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub aws_region: String,
    /// Bootstrap the collection once at startup (default: true)
    pub bootstrap_on_start: bool,
    /// Sign requests with static `test`/`test` credentials
    pub static_credentials: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PRODUCTS_TABLE` - Collection name (default: "Products")
    /// - `AWS_ENDPOINT_URL` - Custom store endpoint (default: unset, real AWS)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `BOOTSTRAP_ON_START` - "false" or "0" disables startup bootstrap
    ///
    /// Credentials are read by the AWS SDK (`AWS_ACCESS_KEY_ID`,
    /// `AWS_SECRET_ACCESS_KEY`, profiles, instance roles). When
    /// `AWS_ENDPOINT_URL` is set and `AWS_ACCESS_KEY_ID` is not, static
    /// `test`/`test` credentials are used, which LocalStack accepts.
    pub fn from_env() -> Self {
        let aws_endpoint_url = env::var("AWS_ENDPOINT_URL")
            .ok()
            .filter(|url| !url.is_empty());
        let static_credentials = use_static_credentials(
            aws_endpoint_url.as_deref(),
            env::var_os("AWS_ACCESS_KEY_ID").is_some(),
        );

        Self {
            table_name: env::var("PRODUCTS_TABLE")
                .unwrap_or_else(|_| PRODUCTS_TABLE_NAME.to_string()),
            aws_endpoint_url,
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            bootstrap_on_start: env::var("BOOTSTRAP_ON_START")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            static_credentials,
        }
    }

    /// Returns a display string for the target store.
    pub fn target_display(&self) -> String {
        match &self.aws_endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.aws_region),
        }
    }
}

/// Local endpoints get dummy credentials unless real keys are exported.
fn use_static_credentials(endpoint: Option<&str>, access_key_set: bool) -> bool {
    endpoint.is_some() && !access_key_set
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
