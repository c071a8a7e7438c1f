use crate::domain::errors::DomainResult;
use crate::domain::playlist::entity::{NewPlaylist, NewPlaylistEntry, Playlist, PlaylistEntry};
use async_trait::async_trait;

#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Playlist>>;

    /// Playlists matching both like-patterns ("%" matches everything).
    async fn find_by_filter(&self, name: &str, genre: &str) -> DomainResult<Vec<Playlist>>;

    async fn find_by_user_id(&self, user_id: i64) -> DomainResult<Vec<Playlist>>;

    async fn insert(&self, new_playlist: NewPlaylist) -> DomainResult<Playlist>;

    async fn update(&self, playlist: &Playlist) -> DomainResult<()>;

    async fn delete_by_id(&self, id: i64) -> DomainResult<()>;
}

#[async_trait]
pub trait PlaylistEntryRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<PlaylistEntry>>;

    async fn find_by_playlist_id(&self, playlist_id: i64) -> DomainResult<Vec<PlaylistEntry>>;

    async fn insert(&self, new_entry: NewPlaylistEntry) -> DomainResult<PlaylistEntry>;

    async fn delete_by_id(&self, id: i64) -> DomainResult<()>;
}
