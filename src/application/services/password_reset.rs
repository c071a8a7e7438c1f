// src/application/services/password_reset.rs
use std::sync::Arc;

use chrono::Duration;

use crate::application::dto::VerifiedResetDto;
use crate::application::ports::{
    mailer::Mailer, security::PasswordHasher, time::Clock, util::ResetTokenGenerator,
};
use crate::domain::errors::{DomainError, DomainResult, ErrorKind};
use crate::domain::fields;
use crate::domain::password_reset::{PasswordReset, PasswordResetRepository};
use crate::domain::user::UserRepository;

const EMAIL_SUBJECT: &str = "Reset Your Password";

pub struct ResetPasswordData {
    pub user_id: i64,
    pub token: String,
    pub password: String,
}

/// Runtime knobs for the reset flow: where links point and how long a token
/// stays valid.
#[derive(Debug, Clone)]
pub struct PasswordResetConfig {
    pub public_base_url: String,
    pub token_ttl: Duration,
}

pub struct PasswordResetService {
    reset_repo: Arc<dyn PasswordResetRepository>,
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    mailer: Arc<dyn Mailer>,
    clock: Arc<dyn Clock>,
    reset_tokens: Arc<dyn ResetTokenGenerator>,
    config: PasswordResetConfig,
}

impl PasswordResetService {
    pub fn new(
        reset_repo: Arc<dyn PasswordResetRepository>,
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        reset_tokens: Arc<dyn ResetTokenGenerator>,
        config: PasswordResetConfig,
    ) -> Self {
        Self {
            reset_repo,
            user_repo,
            password_hasher,
            mailer,
            clock,
            reset_tokens,
            config,
        }
    }

    /// Issue a reset grant for the account behind `email` and mail the link.
    /// The grant is only persisted once the mail has been handed off.
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            return Err(DomainError::with_field(
                "user does not exist",
                ErrorKind::NotFound,
                fields::USER,
            ));
        };

        let token = self.reset_tokens.generate();
        let reset = PasswordReset {
            user_id: user.id,
            token: token.clone(),
            expires: self.clock.now() + self.config.token_ttl,
        };

        let content = reset_mail_body(&user.username, &self.reset_url(user.id, &token));
        self.mailer.send(&user.email, EMAIL_SUBJECT, &content).await?;

        self.reset_repo.upsert(reset).await
    }

    /// Check that the grant exists, the token matches, and it has not
    /// expired. Any failure is reported identically so callers cannot probe
    /// which condition failed.
    pub async fn verify_token(&self, user_id: i64, token: &str) -> DomainResult<VerifiedResetDto> {
        self.lookup_valid_reset(user_id, token).await.map(Into::into)
    }

    pub async fn reset_password(&self, data: ResetPasswordData) -> DomainResult<()> {
        let reset = self.lookup_valid_reset(data.user_id, &data.token).await?;

        let Some(mut user) = self.user_repo.find_by_id(reset.user_id).await? else {
            return Err(DomainError::with_field(
                "user does not exist",
                ErrorKind::NotFound,
                fields::USER,
            ));
        };

        user.password_hash = self.password_hasher.hash(&data.password).await?;

        self.user_repo.update(&user).await?;
        self.reset_repo.delete_by_user_id(reset.user_id).await
    }

    async fn lookup_valid_reset(&self, user_id: i64, token: &str) -> DomainResult<PasswordReset> {
        match self.reset_repo.find_by_user_id(user_id).await? {
            Some(reset) if reset.token == token && reset.expires > self.clock.now() => Ok(reset),
            _ => Err(DomainError::with_field(
                "password reset token is invalid",
                ErrorKind::BadValue,
                fields::TOKEN,
            )),
        }
    }

    fn reset_url(&self, user_id: i64, token: &str) -> String {
        format!(
            "{}/api/v1/password/reset?userId={user_id}&token={token}",
            self.config.public_base_url
        )
    }
}

fn reset_mail_body(username: &str, reset_url: &str) -> String {
    format!(
        "<html><body>\
         <p>Hi {username},</p>\
         <p>We received a request to reset your password. The link below is \
         valid for a short time:</p>\
         <p><a href=\"{reset_url}\">Reset my password</a></p>\
         <p>If you didn't ask for this, you can safely ignore this email.</p>\
         </body></html>"
    )
}
