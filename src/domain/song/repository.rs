use crate::domain::errors::DomainResult;
use crate::domain::song::entity::{NewSong, Song};
use async_trait::async_trait;

#[async_trait]
pub trait SongRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Song>>;

    async fn find_all(&self) -> DomainResult<Vec<Song>>;

    /// Songs whose title contains the given fragment.
    async fn find_by_title_contains(&self, fragment: &str) -> DomainResult<Vec<Song>>;

    async fn find_by_reference(&self, reference: &str) -> DomainResult<Option<Song>>;

    async fn insert(&self, new_song: NewSong) -> DomainResult<Song>;
}
