// src/infrastructure/email.rs
use crate::application::ports::mailer::Mailer;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Mailer that records outbound mail in the structured log instead of
/// speaking SMTP. Delivery is owned by an external relay in deployment; this
/// adapter keeps the port exercised everywhere else.
pub struct TracingMailer {
    sender: String,
}

impl TracingMailer {
    pub fn new(sender: String) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl Mailer for TracingMailer {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> DomainResult<()> {
        tracing::info!(
            from = %self.sender,
            to = %recipient,
            subject = %subject,
            bytes = html_body.len(),
            "outbound mail"
        );
        Ok(())
    }
}
