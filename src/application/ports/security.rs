// src/application/ports/security.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> DomainResult<String>;

    /// Check a candidate password against a stored hash. A mismatch is a
    /// normal outcome (`Ok(false)`), not an error.
    async fn verify(&self, password: &str, expected_hash: &str) -> DomainResult<bool>;
}
