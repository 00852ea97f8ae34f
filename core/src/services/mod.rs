//! Business services containing domain logic and use cases.

pub mod auth;
pub mod lockout;
pub mod password;
pub mod provisioning;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use lockout::{LockoutConfig, SuspiciousActivityDetector};
pub use password::{BcryptPasswordHasher, PasswordHasherTrait};
pub use provisioning::ProvisioningService;
pub use token::{TokenService, TokenServiceConfig};
