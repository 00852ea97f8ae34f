//! Authentication event repository module.

mod r#trait;
pub use r#trait::{AuthEventRepository, TimeRange, EVENT_QUERY_LIMIT};

mod mock;
pub use mock::MockAuthEventRepository;
