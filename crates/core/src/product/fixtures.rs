//! Fixture records written into a freshly created products collection.

use rust_decimal::Decimal;

use super::types::Product;

/// Returns the two records seeded into a newly created collection.
///
/// # Example
///
/// ```
/// use products_core::product::seed_products;
///
/// let products = seed_products();
/// assert_eq!(products.len(), 2);
/// assert_eq!(products[0].id, "1");
/// ```
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "Product 1",
            Decimal::new(1099, 2),
            "This is product 1",
            100,
        ),
        Product::new(
            "2",
            "Product 2",
            Decimal::new(2099, 2),
            "This is product 2",
            200,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_seed_products_values() {
        let products = seed_products();

        assert_eq!(products[0].name, "Product 1");
        assert_eq!(products[0].price, dec!(10.99));
        assert_eq!(products[0].stock, 100);
        assert_eq!(products[1].id, "2");
        assert_eq!(products[1].price, dec!(20.99));
        assert_eq!(products[1].description, "This is product 2");
        assert_eq!(products[1].stock, 200);
    }
}
