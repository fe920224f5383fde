//! Engine configuration
//!
//! [`BusinessRules`] carries the storefront's published business constants
//! (discount thresholds and rates, quantity bounds, the coupon set).
//! [`Config`] holds runtime settings, each overridable through environment
//! variables:
//!
//! | Env var | Default | Meaning |
//! |---------|---------|---------|
//! | STORE_WORK_DIR | ./data | Directory holding the cart database |
//! | LOG_LEVEL | info | Log filter for the demo driver |

use shared::models::{CouponConditions, CouponConfig};

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where the cart database file lives
    pub work_dir: String,
    /// Log level for the demo driver: trace | debug | info | warn | error
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, using defaults when
    /// unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("STORE_WORK_DIR").unwrap_or_else(|_| "./data".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "./data".into(),
            log_level: "info".into(),
        }
    }
}

/// Published business rules for the storefront
#[derive(Debug, Clone)]
pub struct BusinessRules {
    /// Aggregate quantity at which the bulk discount applies
    pub bulk_threshold: u32,
    /// Bulk discount rate (0.10 = 10%)
    pub bulk_rate: f64,
    /// Remaining subtotal at which the order discount applies
    pub order_threshold: f64,
    /// Order discount rate (0.15 = 15%)
    pub order_rate: f64,
    /// Tax rate applied to the discounted total (display projection)
    pub tax_rate: f64,
    /// Lowest quantity a cart line may hold
    pub quantity_min: u32,
    /// Highest quantity a cart line may hold
    pub quantity_max: u32,
    /// Coupons loaded into the registry at startup
    pub coupons: Vec<CouponConfig>,
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            bulk_threshold: 5,
            bulk_rate: 0.10,
            order_threshold: 100.0,
            order_rate: 0.15,
            tax_rate: 0.10,
            quantity_min: 1,
            quantity_max: 99,
            coupons: vec![
                CouponConfig {
                    code: "SAVE10".to_string(),
                    name: "10% Off".to_string(),
                    description: "Save 10% on your order".to_string(),
                    kind: "percentage".to_string(),
                    value: 0.10,
                    conditions: None,
                },
                CouponConfig {
                    code: "SAVE20".to_string(),
                    name: "$20 Off".to_string(),
                    description: "Save $20 on orders over $100".to_string(),
                    kind: "fixed".to_string(),
                    value: 20.0,
                    conditions: None,
                },
                CouponConfig {
                    code: "WELCOME15".to_string(),
                    name: "Welcome Discount".to_string(),
                    description: "$15 off for orders over $50".to_string(),
                    kind: "conditional".to_string(),
                    value: 15.0,
                    conditions: Some(CouponConditions {
                        min_amount: Some(50.0),
                        ..Default::default()
                    }),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_business_rules() {
        let rules = BusinessRules::default();

        assert_eq!(rules.bulk_threshold, 5);
        assert_eq!(rules.bulk_rate, 0.10);
        assert_eq!(rules.order_threshold, 100.0);
        assert_eq!(rules.order_rate, 0.15);
        assert_eq!(rules.quantity_min, 1);
        assert_eq!(rules.quantity_max, 99);
        assert_eq!(rules.coupons.len(), 3);
    }

    #[test]
    fn test_default_coupon_codes() {
        let rules = BusinessRules::default();
        let codes: Vec<&str> = rules.coupons.iter().map(|c| c.code.as_str()).collect();

        assert_eq!(codes, vec!["SAVE10", "SAVE20", "WELCOME15"]);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert_eq!(config.work_dir, "./data");
        assert_eq!(config.log_level, "info");
    }
}
