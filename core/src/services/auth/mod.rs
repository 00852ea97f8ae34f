//! Authentication service module
//!
//! This module provides the password authentication flow:
//! - Account lookup by email with anti-enumeration failure mapping
//! - Lockout evaluation before any password comparison
//! - Password verification against the stored hash
//! - One authentication event recorded per completed attempt
//! - Trusted-identifier resolution for callers holding a verified token

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
