//! Account route handlers
//!
//! Endpoints under `/user` sit behind the JWT middleware; handlers here
//! receive the verified claims as an [`AuthContext`](crate::middleware::AuthContext)
//! and re-resolve the caller against storage before acting.

pub mod create;
pub mod me;

pub use create::create_account;
pub use me::me;
