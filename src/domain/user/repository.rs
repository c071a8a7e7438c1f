use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;

    async fn find_all(&self) -> DomainResult<Vec<User>>;

    /// Users whose username starts with the given prefix.
    async fn find_by_username_prefix(&self, prefix: &str) -> DomainResult<Vec<User>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Users colliding with either the username or the email,
    /// compared case-insensitively.
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> DomainResult<Vec<User>>;

    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, user: &User) -> DomainResult<()>;

    async fn delete_by_id(&self, id: i64) -> DomainResult<()>;
}
