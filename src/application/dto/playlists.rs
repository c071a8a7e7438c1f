use crate::domain::playlist::Playlist;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDto {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub total_listens: i32,
    pub is_private: bool,
    pub genre: String,
    pub date_created: DateTime<Utc>,
}

impl From<Playlist> for PlaylistDto {
    fn from(playlist: Playlist) -> Self {
        Self {
            id: playlist.id,
            name: playlist.name,
            user_id: playlist.user_id,
            total_listens: playlist.total_listens,
            is_private: playlist.is_private,
            genre: playlist.genre,
            date_created: playlist.date_created,
        }
    }
}
