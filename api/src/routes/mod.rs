//! HTTP route handlers
//!
//! Routes are grouped by concern: `auth` carries the public login endpoint
//! and the shared application state, `account` carries the JWT-guarded
//! account endpoints.

pub mod account;
pub mod auth;

pub use auth::AppState;
