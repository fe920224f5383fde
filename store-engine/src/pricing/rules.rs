//! Discount Rule Set
//!
//! The three rules the calculator chains, as a tagged variant. The coupon
//! adapter is the only rule that consumes the checkout's coupon code; that
//! capability is carried by the variant itself rather than by comparing
//! display names.

use super::registry::CouponRegistry;
use rust_decimal::Decimal;
use shared::models::CartLine;

/// One rule in the ordered discount chain
#[derive(Debug, Clone)]
pub enum DiscountRule {
    /// Percentage off once the cart reaches an aggregate quantity threshold
    BulkQuantity { threshold: u32, rate: Decimal },
    /// Percentage off once the remaining subtotal reaches a dollar threshold
    OrderTotal { threshold: Decimal, rate: Decimal },
    /// Delegates to the registered coupon named by the checkout code
    CouponAdapter { registry: CouponRegistry },
}

impl DiscountRule {
    /// Display name used in the discount breakdown
    pub fn name(&self) -> &'static str {
        match self {
            Self::BulkQuantity { .. } => "Bulk Discount",
            Self::OrderTotal { .. } => "Order Discount",
            Self::CouponAdapter { .. } => "Coupon Discount",
        }
    }

    /// Human description for display
    pub fn description(&self) -> String {
        match self {
            Self::BulkQuantity { threshold, rate } => format!(
                "{}% off when purchasing {} or more items",
                (*rate * Decimal::ONE_HUNDRED).normalize(),
                threshold
            ),
            Self::OrderTotal { threshold, rate } => format!(
                "{}% off orders over ${}",
                (*rate * Decimal::ONE_HUNDRED).normalize(),
                threshold.normalize()
            ),
            Self::CouponAdapter { .. } => "Apply the checkout coupon code".to_string(),
        }
    }

    /// Whether the rule fires against the current remaining subtotal.
    ///
    /// Every rule receives the coupon code; only the adapter reads it.
    pub fn is_applicable(&self, items: &[CartLine], remaining: Decimal, coupon_code: &str) -> bool {
        match self {
            Self::BulkQuantity { threshold, .. } => total_quantity(items) >= *threshold,
            Self::OrderTotal { threshold, .. } => remaining >= *threshold,
            Self::CouponAdapter { registry } => {
                !coupon_code.is_empty() && registry.is_valid_code(coupon_code)
            }
        }
    }

    /// Discount amount against the remaining subtotal; 0 when not applicable
    pub fn calculate(&self, items: &[CartLine], remaining: Decimal, coupon_code: &str) -> Decimal {
        if !self.is_applicable(items, remaining, coupon_code) {
            return Decimal::ZERO;
        }

        match self {
            Self::BulkQuantity { rate, .. } => remaining * *rate,
            Self::OrderTotal { rate, .. } => remaining * *rate,
            Self::CouponAdapter { registry } => registry
                .get(coupon_code)
                .filter(|coupon| coupon.is_valid(items, remaining))
                .map(|coupon| coupon.calculate(items, remaining))
                .unwrap_or(Decimal::ZERO),
        }
    }
}

/// Sum of quantities across all lines
pub(crate) fn total_quantity(items: &[CartLine]) -> u32 {
    items.iter().map(|line| line.quantity).sum()
}
