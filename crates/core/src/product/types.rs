use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product record, addressed by a caller-supplied `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Unit price. Non-negative by convention, not enforced.
    ///
    /// Written as a JSON number with its exact digits; a JSON string is
    /// accepted on input too.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub description: String,
    /// Quantity in stock. Non-negative by convention, not enforced.
    pub stock: i32,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        description: impl Into<String>,
        stock: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: description.into(),
            stock,
        }
    }

    /// Returns the mutable fields of this product.
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
            stock: self.stock,
        }
    }

    /// Returns a copy of this product with every field except `id` replaced.
    pub fn with_fields(&self, fields: ProductFields) -> Self {
        Self {
            id: self.id.clone(),
            name: fields.name,
            price: fields.price,
            description: fields.description,
            stock: fields.stock,
        }
    }
}

/// The fields replaced by an update. Updates always replace all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub stock: i32,
}
