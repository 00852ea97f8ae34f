//! # Gatehouse Core
//!
//! Core business logic and domain layer for the Gatehouse authentication
//! service. This crate contains the account and auth-event entities, the
//! repository interfaces (with in-memory mocks), the authentication and
//! provisioning services, the event-sourced lockout detector, and the error
//! taxonomy exposed at the service boundary.
//!
//! The crate is storage- and transport-agnostic: everything it needs from
//! the outside world enters through the traits in [`repositories`] and
//! [`services::password`].

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
