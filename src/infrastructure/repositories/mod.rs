// src/infrastructure/repositories/mod.rs
use crate::domain::errors::{DomainError, ErrorKind};

mod postgres_password_reset;
mod postgres_playlist;
mod postgres_room;
mod postgres_song;
mod postgres_user;

pub use postgres_password_reset::PostgresPasswordResetRepository;
pub use postgres_playlist::{PostgresPlaylistEntryRepository, PostgresPlaylistRepository};
pub use postgres_room::PostgresRoomRepository;
pub use postgres_song::PostgresSongRepository;
pub use postgres_user::PostgresUserRepository;

/// Driver failures carry connection strings, SQL, and other detail that must
/// stay server-side; they surface as the internal kind with the detail kept
/// in the log-only message.
pub(crate) fn map_sqlx(err: sqlx::Error) -> DomainError {
    DomainError::new(format!("database error: {err}"), ErrorKind::Internal)
}
