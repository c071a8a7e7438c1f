use crate::domain::errors::DomainResult;
use crate::domain::password_reset::entity::PasswordReset;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordResetRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: i64) -> DomainResult<Option<PasswordReset>>;

    /// Insert the grant, replacing any existing grant for the same user.
    async fn upsert(&self, reset: PasswordReset) -> DomainResult<()>;

    async fn delete_by_user_id(&self, user_id: i64) -> DomainResult<()>;
}
