//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal error body returned to external callers.
///
/// Failures cross the service boundary as a coarse kind only; backend
/// detail stays in the operator logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Failure kind, e.g. `AuthenticationFailure`
    pub error: String,
}

impl ErrorBody {
    /// Create an error body for the given failure kind
    pub fn new(kind: impl Into<String>) -> Self {
        Self { error: kind.into() }
    }
}

/// Health check response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Service version
    pub version: String,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Create a healthy response for the given service
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: String::from("healthy"),
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Service identification body served at the API root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Human-readable service name
    pub msg: String,

    /// Service version
    pub version: String,
}

impl ServiceInfo {
    pub fn new(msg: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            version: version.into(),
        }
    }
}
