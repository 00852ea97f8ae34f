//! Account provisioning module
//!
//! Creates accounts against a store that has no native uniqueness
//! constraint on email. Uniqueness is enforced by a check-then-insert
//! sequence; the window between the two steps is a known race, accepted
//! and covered by tests rather than papered over.

mod service;

#[cfg(test)]
mod tests;

pub use service::ProvisioningService;
