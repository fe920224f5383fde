//! Cart line and discount breakdown records

use super::product::Product;
use serde::{Deserialize, Serialize};

/// A cart line: one product with its quantity.
///
/// The cart holds at most one line per product id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// New line at quantity 1
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Line total (price × quantity)
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// One applied discount, in application order, for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountBreakdownItem {
    pub name: String,
    /// Calculated amount for this rule against the remaining subtotal
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: i64, price: f64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            price,
            image: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_new_line_starts_at_one() {
        let line = CartLine::new(make_product(1, 9.99));
        assert_eq!(line.quantity, 1);
        assert_eq!(line.line_total(), 9.99);
    }

    #[test]
    fn test_line_total() {
        let mut line = CartLine::new(make_product(1, 12.50));
        line.quantity = 4;
        assert_eq!(line.line_total(), 50.0);
    }

    #[test]
    fn test_cart_line_serialization() {
        let line = CartLine {
            product: make_product(7, 79.99),
            quantity: 3,
        };

        let json = serde_json::to_string(&line).unwrap();
        let deserialized: CartLine = serde_json::from_str(&json).unwrap();

        assert_eq!(line, deserialized);
    }

    #[test]
    fn test_breakdown_item_serialization() {
        let item = DiscountBreakdownItem {
            name: "Bulk Discount".to_string(),
            amount: 12.5,
        };

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: DiscountBreakdownItem = serde_json::from_str(&json).unwrap();

        assert_eq!(item, deserialized);
    }
}
