//! Authentication route handlers
//!
//! This module contains the credential login endpoint and the application
//! state shared across all handlers.

pub mod login;

pub use login::AppState;
