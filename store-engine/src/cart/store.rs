//! Cart Store
//!
//! Holds the live line items, re-derives counts and totals on demand,
//! persists the line list after every mutation, and prices the cart through
//! the discount calculator.
//!
//! Faults degrade, they do not propagate: a failed persist keeps the
//! in-memory state authoritative, a corrupt stored payload is discarded, and
//! a pricing fault falls back to a zero discount so the caller always has a
//! renderable total.

use super::storage::CartStorage;
use crate::core::{BusinessRules, Config, EngineResult};
use crate::pricing::{CouponRegistry, DiscountCalculator, PricingResult};
use serde::Serialize;
use shared::models::{CartLine, DiscountBreakdownItem, Product};
use shared::money;

/// Database file created under the configured work directory
const CART_DB_FILE: &str = "cart.redb";

/// Priced projection of the cart, serializable for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartTotals {
    /// Raw subtotal before discounts
    pub subtotal: f64,
    /// Total discount across the chain
    pub discount: f64,
    /// subtotal - discount
    pub total: f64,
    /// Applied discounts in application order
    pub breakdown: Vec<DiscountBreakdownItem>,
}

/// Stateful cart over a storage slot and a discount calculator
pub struct CartStore {
    storage: CartStorage,
    calculator: DiscountCalculator,
    rules: BusinessRules,
    lines: Vec<CartLine>,
    coupon_code: String,
}

impl CartStore {
    /// Open the store, loading any previously persisted cart.
    ///
    /// An unreadable or unparseable stored payload is discarded (the slot is
    /// deleted) and the cart starts empty; a parseable payload of the wrong
    /// shape is ignored without deleting the slot.
    pub fn new(storage: CartStorage, rules: BusinessRules, registry: CouponRegistry) -> Self {
        let calculator = DiscountCalculator::new(&rules, registry);

        let lines = match storage.load() {
            Ok(Some(lines)) => lines,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load stored cart, discarding slot");
                if let Err(err) = storage.discard() {
                    tracing::warn!(error = %err, "failed to discard corrupted cart slot");
                }
                Vec::new()
            }
        };

        Self {
            storage,
            calculator,
            rules,
            lines,
            coupon_code: String::new(),
        }
    }

    /// Wire a store from configuration: open the database under the work
    /// directory and load the coupon registry from the business rules.
    pub fn open(config: &Config, rules: BusinessRules) -> EngineResult<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        let db_path = std::path::Path::new(&config.work_dir).join(CART_DB_FILE);
        let storage = CartStorage::open(db_path)?;
        let registry = CouponRegistry::with_configs(&rules.coupons)?;
        Ok(Self::new(storage, rules, registry))
    }

    // ==================== Commands ====================

    /// Add one unit of the product.
    ///
    /// A new product gets a line at quantity 1 appended at the back; an
    /// existing line is incremented, capped at the configured maximum.
    pub fn add_item(&mut self, product: Product) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => {
                line.quantity = (line.quantity + 1).min(self.rules.quantity_max);
            }
            None => {
                tracing::debug!(product_id = product.id, name = %product.name, "adding product to cart");
                self.lines.push(CartLine::new(product));
            }
        }
        self.persist();
    }

    /// Set a line's quantity.
    ///
    /// Zero or below removes the line; anything else is clamped to the
    /// configured bounds. Unknown product ids are ignored.
    pub fn update_quantity(&mut self, product_id: i64, quantity: i32) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        let clamped = (quantity as u32).clamp(self.rules.quantity_min, self.rules.quantity_max);
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = clamped;
            self.persist();
        }
    }

    /// Remove the line for the given product id
    pub fn remove_item(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product.id != product_id);
        self.persist();
    }

    /// Empty the cart and drop any applied coupon
    pub fn clear(&mut self) {
        self.lines.clear();
        self.coupon_code.clear();
        self.persist();
    }

    /// Apply a coupon code.
    ///
    /// The code is held as given; validity is resolved at pricing time, so
    /// an unknown code simply contributes no discount.
    pub fn apply_coupon(&mut self, code: &str) {
        self.coupon_code = code.to_string();
    }

    /// Drop the applied coupon code
    pub fn remove_coupon(&mut self) {
        self.coupon_code.clear();
    }

    // ==================== Projections ====================

    /// Cart lines in insertion order
    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    /// Currently applied coupon code (empty = none)
    pub fn coupon_code(&self) -> &str {
        &self.coupon_code
    }

    /// Sum of quantities across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Raw subtotal before discounts (sum of price × quantity)
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total discount for the current cart
    pub fn discount(&self) -> f64 {
        self.totals().discount
    }

    /// Discounted total (subtotal - discount)
    pub fn total(&self) -> f64 {
        self.totals().total
    }

    /// Applied discounts in application order
    pub fn discount_breakdown(&self) -> Vec<DiscountBreakdownItem> {
        self.totals().breakdown
    }

    /// Priced projection of the cart.
    ///
    /// Recomputed from the line list on every call. A pricing fault is
    /// logged and the projection falls open to a zero discount.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        match self.price(subtotal) {
            Ok(totals) => totals,
            Err(err) => {
                tracing::error!(error = %err, "discount calculation failed, falling back to zero discount");
                CartTotals {
                    subtotal,
                    discount: 0.0,
                    total: subtotal,
                    breakdown: Vec::new(),
                }
            }
        }
    }

    /// Tax on the discounted total (display projection)
    pub fn tax(&self) -> f64 {
        let total = money::to_decimal(self.totals().total).unwrap_or_default();
        let rate = money::to_decimal(self.rules.tax_rate).unwrap_or_default();
        money::to_f64(total * rate)
    }

    fn price(&self, subtotal: f64) -> PricingResult<CartTotals> {
        let breakdown = self
            .calculator
            .breakdown(&self.lines, subtotal, &self.coupon_code)?;
        let discount: f64 = breakdown.iter().map(|entry| entry.amount).sum();

        Ok(CartTotals {
            subtotal,
            discount,
            total: subtotal - discount,
            breakdown,
        })
    }

    /// Re-persist the line list; write failure is logged, never fatal
    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.lines) {
            tracing::warn!(error = %err, "failed to persist cart, keeping in-memory state");
        }
    }
}
