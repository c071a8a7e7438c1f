use crate::domain::password_reset::PasswordReset;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// View of a verified reset grant. The token is deliberately absent: the
/// caller already holds it, and it must never round-trip through a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedResetDto {
    pub user_id: i64,
    pub expires: DateTime<Utc>,
}

impl From<PasswordReset> for VerifiedResetDto {
    fn from(reset: PasswordReset) -> Self {
        Self {
            user_id: reset.user_id,
            expires: reset.expires,
        }
    }
}
