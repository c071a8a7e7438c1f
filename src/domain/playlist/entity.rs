// src/domain/playlist/entity.rs
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Playlist {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub total_listens: i32,
    pub is_private: bool,
    pub genre: String,
    pub date_created: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPlaylist {
    pub name: String,
    pub user_id: i64,
    pub is_private: bool,
    pub genre: String,
    pub date_created: DateTime<Utc>,
}

/// Membership of one song in one playlist. A song may appear in many
/// playlists; each membership has its own id so it can be removed on its own.
#[derive(Debug, Clone)]
pub struct PlaylistEntry {
    pub id: i64,
    pub playlist_id: i64,
    pub song_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewPlaylistEntry {
    pub playlist_id: i64,
    pub song_id: i64,
}
