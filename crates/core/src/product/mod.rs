mod fixtures;
mod types;

pub use fixtures::seed_products;
pub use types::{Product, ProductFields};
