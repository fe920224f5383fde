//! Core module - configuration, business rules, and error definitions
//!
//! - [`Config`] - runtime configuration (paths, logging)
//! - [`BusinessRules`] - published storefront business constants
//! - [`EngineError`] - unified engine error

pub mod config;
pub mod error;

pub use config::{BusinessRules, Config};
pub use error::{EngineError, EngineResult};
