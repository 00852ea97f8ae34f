//! Account repository module.

mod r#trait;
pub use r#trait::{AccountRepository, EmailMatches, InsertOutcome};

mod mock;
pub use mock::MockAccountRepository;
