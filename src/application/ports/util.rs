// src/application/ports/util.rs

/// Source of opaque single-use password-reset tokens.
pub trait ResetTokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}
