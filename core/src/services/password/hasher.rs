//! Bcrypt-backed password hashing

use async_trait::async_trait;

use crate::errors::{DomainError, DomainResult};

/// Trait for password hashing and verification
///
/// Both operations are async because real implementations offload the
/// CPU-heavy work to a blocking thread pool.
#[async_trait]
pub trait PasswordHasherTrait: Send + Sync {
    /// Hash a plaintext password
    ///
    /// # Arguments
    /// * `password` - The plaintext password
    ///
    /// # Returns
    /// * `Ok(String)` - The hash, safe to persist
    /// * `Err(DomainError)` - If hashing fails
    async fn hash(&self, password: &str) -> DomainResult<String>;

    /// Verify a plaintext password against a stored hash
    ///
    /// # Arguments
    /// * `password` - The plaintext password to check
    /// * `hash` - The stored hash to check against
    ///
    /// # Returns
    /// * `Ok(true)` - Password matches
    /// * `Ok(false)` - Password does not match
    /// * `Err(DomainError)` - Hash is malformed or the check failed
    async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool>;
}

/// Password hasher backed by bcrypt
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the bcrypt default cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost factor.
    ///
    /// Tests use cost 4, the lowest bcrypt accepts, to keep hashing fast.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasherTrait for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to hash password: {}", e),
            })
    }

    async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to verify password: {}", e),
            })
    }
}
