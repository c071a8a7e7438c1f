// src/domain/password_reset/entity.rs
use chrono::{DateTime, Utc};

/// An outstanding password-reset grant. At most one per user; issuing a new
/// one replaces the previous. The token itself never appears in responses.
#[derive(Debug, Clone)]
pub struct PasswordReset {
    pub user_id: i64,
    pub token: String,
    pub expires: DateTime<Utc>,
}
