//! Type definitions shared with the transport layer
//!
//! - `response` - wire-level response bodies

pub mod response;

// Re-export commonly used types at module level
pub use response::{ErrorBody, HealthResponse, ServiceInfo};
