//! Account lockout detection
//!
//! Derives the lockout decision for an account from its recorded event
//! history instead of a mutable counter. Every check replays the recent
//! events, so the decision can never drift out of sync with the log.

mod config;
mod detector;

#[cfg(test)]
mod tests;

pub use config::LockoutConfig;
pub use detector::SuspiciousActivityDetector;
