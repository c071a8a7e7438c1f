use crate::application::ports::security::PasswordHasher;
use crate::domain::errors::{DomainError, DomainResult, ErrorKind};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| {
                    DomainError::new(format!("password hashing failed: {err}"), ErrorKind::Internal)
                })
        })
        .await
        .map_err(|err| DomainError::new(format!("hashing task failed: {err}"), ErrorKind::Internal))?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> DomainResult<bool> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&expected_hash).map_err(|err| {
                DomainError::new(format!("stored hash is unreadable: {err}"), ErrorKind::Internal)
            })?;
            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|err| {
            DomainError::new(format!("verification task failed: {err}"), ErrorKind::Internal)
        })?
    }
}
