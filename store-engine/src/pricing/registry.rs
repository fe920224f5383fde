//! Coupon Registry
//!
//! One shared catalog of registered coupons per process. The registry is an
//! explicitly constructed instance handed to the discount calculator at
//! construction time; there is no global state. Cloning shares the
//! underlying map.

use super::coupon::{CouponConfigError, CouponStrategy};
use parking_lot::RwLock;
use shared::models::CouponConfig;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry mapping uppercased coupon code → strategy
#[derive(Debug, Clone, Default)]
pub struct CouponRegistry {
    strategies: Arc<RwLock<HashMap<String, CouponStrategy>>>,
}

impl CouponRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry preloaded with the given configuration records
    pub fn with_configs(configs: &[CouponConfig]) -> Result<Self, CouponConfigError> {
        let registry = Self::new();
        registry.register_all(configs)?;
        Ok(registry)
    }

    /// Register one coupon.
    ///
    /// Codes are stored uppercased, so lookups are case-insensitive
    /// regardless of how the config spells the code. Re-registering a code
    /// replaces the previous strategy. A failed build (unsupported kind)
    /// leaves existing entries untouched.
    pub fn register(&self, config: &CouponConfig) -> Result<(), CouponConfigError> {
        let strategy = CouponStrategy::from_config(config)?;
        self.strategies
            .write()
            .insert(config.code.to_uppercase(), strategy);
        Ok(())
    }

    /// Register many coupons, stopping at the first invalid record.
    ///
    /// Records registered before the failure stay registered.
    pub fn register_all(&self, configs: &[CouponConfig]) -> Result<(), CouponConfigError> {
        for config in configs {
            self.register(config)?;
        }
        Ok(())
    }

    /// Case-insensitive lookup
    pub fn get(&self, code: &str) -> Option<CouponStrategy> {
        self.strategies.read().get(&code.to_uppercase()).cloned()
    }

    /// Whether the code names a registered coupon.
    ///
    /// Existence only; business validity is the strategy's concern.
    pub fn is_valid_code(&self, code: &str) -> bool {
        self.strategies.read().contains_key(&code.to_uppercase())
    }

    /// All registered strategies (unordered)
    pub fn all(&self) -> Vec<CouponStrategy> {
        self.strategies.read().values().cloned().collect()
    }

    /// Remove every registered coupon
    pub fn clear(&self) {
        self.strategies.write().clear();
    }

    pub fn len(&self) -> usize {
        self.strategies.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BusinessRules;
    use shared::models::CouponConfig;

    fn make_config(code: &str, kind: &str, value: f64) -> CouponConfig {
        CouponConfig {
            code: code.to_string(),
            name: format!("{code} name"),
            description: String::new(),
            kind: kind.to_string(),
            value,
            conditions: None,
        }
    }

    #[test]
    fn test_register_and_lookup_case_insensitive() {
        let registry = CouponRegistry::new();
        registry
            .register(&make_config("SAVE10", "percentage", 0.10))
            .unwrap();

        assert!(registry.is_valid_code("SAVE10"));
        assert!(registry.is_valid_code("save10"));
        assert!(registry.is_valid_code("Save10"));
        assert!(registry.get("save10").is_some());
        assert!(!registry.is_valid_code("SAVE100"));
        assert!(registry.get("UNKNOWN").is_none());
    }

    #[test]
    fn test_lowercase_registration_is_reachable() {
        let registry = CouponRegistry::new();
        registry
            .register(&make_config("save10", "percentage", 0.10))
            .unwrap();

        assert!(registry.is_valid_code("SAVE10"));
        assert!(registry.get("Save10").is_some());
    }

    #[test]
    fn test_last_registration_wins() {
        let registry = CouponRegistry::new();
        registry
            .register(&make_config("SAVE10", "percentage", 0.10))
            .unwrap();
        registry
            .register(&make_config("save10", "fixed", 5.0))
            .unwrap();

        assert_eq!(registry.len(), 1);
        let strategy = registry.get("SAVE10").unwrap();
        assert_eq!(strategy.kind(), shared::models::CouponKind::Fixed);
    }

    #[test]
    fn test_failed_registration_preserves_existing_entries() {
        let registry = CouponRegistry::new();
        registry
            .register(&make_config("SAVE10", "percentage", 0.10))
            .unwrap();

        let err = registry.register(&make_config("BROKEN", "bogo", 1.0));

        assert!(err.is_err());
        assert_eq!(registry.len(), 1);
        assert!(registry.is_valid_code("SAVE10"));
        assert!(!registry.is_valid_code("BROKEN"));
    }

    #[test]
    fn test_register_all_stops_at_first_error_keeping_prior() {
        let registry = CouponRegistry::new();
        let configs = vec![
            make_config("A1", "percentage", 0.10),
            make_config("A2", "bogo", 1.0),
            make_config("A3", "fixed", 5.0),
        ];

        assert!(registry.register_all(&configs).is_err());
        assert!(registry.is_valid_code("A1"));
        assert!(!registry.is_valid_code("A2"));
        assert!(!registry.is_valid_code("A3"));
    }

    #[test]
    fn test_with_default_business_rules() {
        let rules = BusinessRules::default();
        let registry = CouponRegistry::with_configs(&rules.coupons).unwrap();

        assert_eq!(registry.len(), 3);
        assert!(registry.is_valid_code("save10"));
        assert!(registry.is_valid_code("SAVE20"));
        assert!(registry.is_valid_code("welcome15"));
    }

    #[test]
    fn test_clear() {
        let registry = CouponRegistry::new();
        registry
            .register(&make_config("SAVE10", "percentage", 0.10))
            .unwrap();
        registry.clear();

        assert!(registry.is_empty());
        assert!(!registry.is_valid_code("SAVE10"));
    }

    #[test]
    fn test_clone_shares_catalog() {
        let registry = CouponRegistry::new();
        let view = registry.clone();
        registry
            .register(&make_config("SAVE10", "percentage", 0.10))
            .unwrap();

        assert!(view.is_valid_code("SAVE10"));
    }
}
