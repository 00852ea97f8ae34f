//! Token service module for JWT management
//!
//! This module handles session token operations:
//! - Signing session tokens carrying the authenticated account's claims
//! - Verifying inbound tokens (signature, expiry, issuer)

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
