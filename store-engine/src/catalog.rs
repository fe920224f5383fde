//! Product catalog
//!
//! Injected, read-only, ordered product list. The engine never mutates it;
//! tests substitute their own fixture lists.

use shared::models::Product;

/// Read-only product catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an ordered product list
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by id
    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The six-product demo data set shipped with the storefront
    pub fn demo() -> Self {
        let make = |id: i64, name: &str, price: f64, description: &str| Product {
            id,
            name: name.to_string(),
            price,
            image: format!("https://picsum.photos/200/150?random={id}"),
            description: description.to_string(),
        };

        Self::new(vec![
            make(
                1,
                "Wireless Headphones",
                79.99,
                "High-quality wireless headphones with noise cancellation.",
            ),
            make(
                2,
                "Smart Watch",
                199.99,
                "Feature-rich smart watch with health tracking.",
            ),
            make(
                3,
                "Laptop Stand",
                49.99,
                "Ergonomic laptop stand for better posture.",
            ),
            make(
                4,
                "Mechanical Keyboard",
                129.99,
                "RGB mechanical keyboard with tactile switches.",
            ),
            make(
                5,
                "USB-C Hub",
                39.99,
                "Multi-port USB-C hub for connectivity.",
            ),
            make(6, "Webcam HD", 89.99, "1080p HD webcam for video calls."),
        ])
    }
}
