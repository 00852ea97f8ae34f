//! Configuration for lockout detection

/// Configuration for the suspicious activity detector
#[derive(Debug, Clone)]
pub struct LockoutConfig {
    /// Failed attempts strictly above this count lock the account (default: 10)
    pub max_failed_attempts: usize,
    /// Lookback horizon in days bounding the decision window when no
    /// successful authentication exists (default: 90)
    pub lookback_days: i64,
}

impl Default for LockoutConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: 10,
            lookback_days: 90,
        }
    }
}

impl LockoutConfig {
    /// Set the failed-attempt threshold
    pub fn with_max_failed_attempts(mut self, max_failed_attempts: usize) -> Self {
        self.max_failed_attempts = max_failed_attempts;
        self
    }

    /// Set the lookback horizon in days
    pub fn with_lookback_days(mut self, lookback_days: i64) -> Self {
        self.lookback_days = lookback_days;
        self
    }
}
