//! Discount Calculator
//!
//! Orchestrates the ordered discount chain: bulk quantity, then order total,
//! then the coupon adapter. The order is load-bearing: later rules see the
//! subtotal *after* earlier discounts are subtracted (compounding, not
//! parallel). Uses rust_decimal for the walk; amounts cross the API as f64.

use super::registry::CouponRegistry;
use super::rules::DiscountRule;
use crate::core::BusinessRules;
use rust_decimal::Decimal;
use shared::models::{CartLine, DiscountBreakdownItem};
use shared::money;
use thiserror::Error;

/// Pricing failure.
///
/// Callers at the presentation boundary fail open to a zero discount.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    #[error("subtotal is not a finite amount: {0}")]
    NonFiniteSubtotal(f64),
}

pub type PricingResult<T> = std::result::Result<T, PricingError>;

/// Ordered discount chain over the cart
#[derive(Debug, Clone)]
pub struct DiscountCalculator {
    chain: Vec<DiscountRule>,
}

impl DiscountCalculator {
    /// Build the standard chain from business rules and a shared registry.
    ///
    /// Chain order: bulk quantity, order total, coupon adapter.
    pub fn new(rules: &BusinessRules, registry: CouponRegistry) -> Self {
        Self {
            chain: vec![
                DiscountRule::BulkQuantity {
                    threshold: rules.bulk_threshold,
                    rate: money::to_decimal(rules.bulk_rate).unwrap_or_default(),
                },
                DiscountRule::OrderTotal {
                    threshold: money::to_decimal(rules.order_threshold).unwrap_or_default(),
                    rate: money::to_decimal(rules.order_rate).unwrap_or_default(),
                },
                DiscountRule::CouponAdapter { registry },
            ],
        }
    }

    /// Total discount for the cart.
    ///
    /// Pure: identical inputs always produce identical output.
    pub fn calculate(
        &self,
        items: &[CartLine],
        subtotal: f64,
        coupon_code: &str,
    ) -> PricingResult<f64> {
        let breakdown = self.walk(items, subtotal, coupon_code)?;
        Ok(breakdown.iter().map(|entry| entry.amount).sum())
    }

    /// Per-rule breakdown, in application order.
    ///
    /// The amounts sum exactly to the value [`calculate`](Self::calculate)
    /// returns for the same inputs; both run the same walk.
    pub fn breakdown(
        &self,
        items: &[CartLine],
        subtotal: f64,
        coupon_code: &str,
    ) -> PricingResult<Vec<DiscountBreakdownItem>> {
        self.walk(items, subtotal, coupon_code)
    }

    /// The single compounding walk both entry points share.
    ///
    /// Each applied amount is clamped to `[0, remaining]`, the one
    /// enforcement point for the "never negative, never exceeds the stage
    /// subtotal" invariant.
    fn walk(
        &self,
        items: &[CartLine],
        subtotal: f64,
        coupon_code: &str,
    ) -> PricingResult<Vec<DiscountBreakdownItem>> {
        let mut remaining =
            money::to_decimal(subtotal).ok_or(PricingError::NonFiniteSubtotal(subtotal))?;
        let mut applied = Vec::new();

        for rule in &self.chain {
            if !rule.is_applicable(items, remaining, coupon_code) {
                continue;
            }

            let cap = remaining.max(Decimal::ZERO);
            let amount = rule
                .calculate(items, remaining, coupon_code)
                .clamp(Decimal::ZERO, cap);

            applied.push(DiscountBreakdownItem {
                name: rule.name().to_string(),
                amount: money::to_f64(amount),
            });
            remaining -= amount;
        }

        Ok(applied)
    }
}
