//! Shared utilities and common types for the Gatehouse server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response body structures shared with the transport layer
//! - Validation helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, JwtConfig, ServerConfig};
pub use types::{ErrorBody, HealthResponse, ServiceInfo};
pub use utils::validation;
