//! Rights map carried opaquely on accounts and session tokens.
//!
//! The engine never interprets individual grants; it only answers whether
//! one map satisfies another. Everything else about rights semantics
//! belongs to the services consuming the token.

use std::collections::HashMap;

/// Nested grant map: resource name to action flags.
pub type Rights = HashMap<String, HashMap<String, bool>>;

/// Checks that every action `required` marks `true` is granted.
///
/// Entries with a `false` flag in `required` are ignored, so a caller
/// demanding nothing is always satisfied.
pub fn has_required_rights(granted: &Rights, required: &Rights) -> bool {
    required.iter().all(|(resource, actions)| {
        actions.iter().all(|(action, needed)| {
            if !needed {
                return true;
            }
            granted
                .get(resource)
                .and_then(|grants| grants.get(action))
                .copied()
                .unwrap_or(false)
        })
    })
}
