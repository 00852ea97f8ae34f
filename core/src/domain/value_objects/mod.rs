//! Value objects representing immutable domain concepts.

pub mod rights;

// Re-export commonly used types
pub use rights::{has_required_rights, Rights};
