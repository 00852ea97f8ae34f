pub mod account;
pub mod event;

pub use account::{AccountRepository, EmailMatches, InsertOutcome, MockAccountRepository};
pub use event::{AuthEventRepository, MockAuthEventRepository, TimeRange, EVENT_QUERY_LIMIT};
