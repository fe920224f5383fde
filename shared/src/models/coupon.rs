//! Coupon configuration records

use serde::{Deserialize, Serialize};

/// Coupon kind enum (tag on a built strategy)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    Percentage,
    Fixed,
    Conditional,
}

/// Optional redemption conditions
///
/// Only `min_amount` is exercised by the current rule set; the remaining
/// fields are accepted for product-scoped coupons.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CouponConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_products: Option<Vec<i64>>,
}

/// Declarative coupon record, loaded once at startup into the registry.
///
/// `kind` is kept as the raw configuration string ("percentage", "fixed",
/// "conditional"); the strategy factory validates it, so an unsupported kind
/// fails that registration only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CouponConfig {
    /// Unique code, matched case-insensitively
    pub code: String,
    pub name: String,
    pub description: String,
    pub kind: String,
    /// Percentage rate (0.10 = 10%) or flat dollar amount, by kind
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<CouponConditions>,
}
