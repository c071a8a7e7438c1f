// src/application/ports/mailer.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Outbound mail delivery. Implementations own the transport and the sender
/// identity; callers provide recipient, subject, and an HTML body.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> DomainResult<()>;
}
