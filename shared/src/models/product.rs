//! Product Model

use serde::{Deserialize, Serialize};

/// Catalog product entity
///
/// Immutable once defined; sourced from the injected catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price in dollars (non-negative)
    pub price: f64,
    /// Image reference (URL or asset key)
    pub image: String,
    pub description: String,
}
