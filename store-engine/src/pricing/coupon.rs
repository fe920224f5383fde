//! Coupon Strategies
//!
//! One evaluable strategy per coupon kind, built from a declarative
//! [`CouponConfig`] record. Strategies are pure: validity and amount depend
//! only on the passed items and subtotal.
//!
//! The current rule set is amount-based, so item contents are ignored; the
//! signatures still accept them for product-scoped conditions.

use rust_decimal::Decimal;
use shared::models::{CartLine, CouponConfig, CouponKind};
use shared::money;
use thiserror::Error;

/// Error building a strategy from a coupon configuration record
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CouponConfigError {
    #[error("unsupported coupon kind \"{kind}\" for code {code}")]
    UnsupportedKind { code: String, kind: String },
}

/// Rule variant of a coupon, dispatched by `match`
#[derive(Debug, Clone, PartialEq)]
pub enum CouponRule {
    /// Percentage of the subtotal (rate 0.10 = 10%)
    Percentage { rate: Decimal },
    /// Flat dollar amount
    Fixed { amount: Decimal },
    /// Flat dollar amount once the subtotal reaches the minimum
    Conditional { min_amount: Decimal, amount: Decimal },
}

/// A registered, evaluable coupon
#[derive(Debug, Clone, PartialEq)]
pub struct CouponStrategy {
    pub code: String,
    pub name: String,
    pub description: String,
    pub rule: CouponRule,
}

impl CouponStrategy {
    /// Build the matching strategy variant from a declarative record.
    ///
    /// Fails for any kind outside {percentage, fixed, conditional}; the
    /// caller's registry is left untouched by a failed build.
    pub fn from_config(config: &CouponConfig) -> Result<Self, CouponConfigError> {
        let value = money::to_decimal(config.value).unwrap_or_default();

        let rule = match config.kind.as_str() {
            "percentage" => CouponRule::Percentage { rate: value },
            "fixed" => CouponRule::Fixed { amount: value },
            "conditional" => CouponRule::Conditional {
                min_amount: config
                    .conditions
                    .as_ref()
                    .and_then(|c| c.min_amount)
                    .and_then(money::to_decimal)
                    .unwrap_or_default(),
                amount: value,
            },
            other => {
                return Err(CouponConfigError::UnsupportedKind {
                    code: config.code.clone(),
                    kind: other.to_string(),
                });
            }
        };

        Ok(Self {
            code: config.code.clone(),
            name: config.name.clone(),
            description: config.description.clone(),
            rule,
        })
    }

    /// Kind tag of this strategy
    pub fn kind(&self) -> CouponKind {
        match self.rule {
            CouponRule::Percentage { .. } => CouponKind::Percentage,
            CouponRule::Fixed { .. } => CouponKind::Fixed,
            CouponRule::Conditional { .. } => CouponKind::Conditional,
        }
    }

    /// Business validity against the current cart
    pub fn is_valid(&self, _items: &[CartLine], subtotal: Decimal) -> bool {
        match &self.rule {
            CouponRule::Percentage { .. } | CouponRule::Fixed { .. } => subtotal > Decimal::ZERO,
            CouponRule::Conditional { min_amount, .. } => subtotal >= *min_amount,
        }
    }

    /// Discount amount against the given subtotal; 0 when not valid
    pub fn calculate(&self, items: &[CartLine], subtotal: Decimal) -> Decimal {
        if !self.is_valid(items, subtotal) {
            return Decimal::ZERO;
        }

        match &self.rule {
            CouponRule::Percentage { rate } => subtotal * *rate,
            CouponRule::Fixed { amount } => *amount,
            CouponRule::Conditional { amount, .. } => *amount,
        }
    }
}
