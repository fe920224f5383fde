//! Shared types for the storefront core
//!
//! Domain models and money helpers used across the workspace: catalog
//! products, cart lines, coupon configuration records, and the
//! decimal-backed price arithmetic.

pub mod models;
pub mod money;

// Re-exports
pub use serde::{Deserialize, Serialize};
