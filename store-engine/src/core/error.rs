//! Unified engine error

use crate::cart::CartStorageError;
use crate::pricing::{CouponConfigError, PricingError};
use thiserror::Error;

/// Top-level error for engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage error: {0}")]
    Storage(#[from] CartStorageError),

    #[error("pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("coupon configuration error: {0}")]
    CouponConfig(#[from] CouponConfigError),
}

/// Result alias for engine operations
pub type EngineResult<T> = std::result::Result<T, EngineError>;
