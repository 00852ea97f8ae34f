//! Common validation helpers
//!
//! Field-level checks used by the provisioning path. These deliberately live
//! outside the transport layer so the domain never depends on request
//! validation having run.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // One @, at least one dot in the domain part, no whitespace.
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Check if a string is not empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length is within bounds (inclusive)
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.len();
    len >= min && len <= max
}

/// Check if an email address is plausibly well-formed
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 255 && EMAIL_REGEX.is_match(email)
}
