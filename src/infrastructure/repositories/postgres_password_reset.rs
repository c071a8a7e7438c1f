// src/infrastructure/repositories/postgres_password_reset.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::password_reset::{PasswordReset, PasswordResetRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPasswordResetRepository {
    pool: PgPool,
}

impl PostgresPasswordResetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PasswordResetRow {
    user_id: i64,
    token: String,
    expires: DateTime<Utc>,
}

impl From<PasswordResetRow> for PasswordReset {
    fn from(row: PasswordResetRow) -> Self {
        PasswordReset {
            user_id: row.user_id,
            token: row.token,
            expires: row.expires,
        }
    }
}

#[async_trait]
impl PasswordResetRepository for PostgresPasswordResetRepository {
    async fn find_by_user_id(&self, user_id: i64) -> DomainResult<Option<PasswordReset>> {
        let row = sqlx::query_as::<_, PasswordResetRow>(
            "SELECT user_id, token, expires FROM password_resets WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn upsert(&self, reset: PasswordReset) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO password_resets (user_id, token, expires)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id) DO UPDATE SET token = $2, expires = $3",
        )
        .bind(reset.user_id)
        .bind(&reset.token)
        .bind(reset.expires)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn delete_by_user_id(&self, user_id: i64) -> DomainResult<()> {
        sqlx::query("DELETE FROM password_resets WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(())
    }
}
