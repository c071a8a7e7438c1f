// src/application/services/songs.rs
use std::sync::Arc;

use crate::application::dto::SongDto;
use crate::domain::errors::{DomainError, DomainResult, ErrorKind};
use crate::domain::fields;
use crate::domain::song::{NewSong, SongRepository};

pub struct CreateSongData {
    pub title: String,
    pub reference: String,
}

pub struct SongService {
    song_repo: Arc<dyn SongRepository>,
}

impl SongService {
    pub fn new(song_repo: Arc<dyn SongRepository>) -> Self {
        Self { song_repo }
    }

    pub async fn get_song_by_id(&self, id: i64) -> DomainResult<SongDto> {
        match self.song_repo.find_by_id(id).await? {
            Some(song) => Ok(song.into()),
            None => Err(DomainError::with_field(
                "song does not exist",
                ErrorKind::NotFound,
                fields::SONG,
            )),
        }
    }

    pub async fn get_all_songs(&self) -> DomainResult<Vec<SongDto>> {
        let songs = self.song_repo.find_all().await?;
        Ok(songs.into_iter().map(Into::into).collect())
    }

    pub async fn get_songs_by_filter(&self, title: &str) -> DomainResult<Vec<SongDto>> {
        let songs = self.song_repo.find_by_title_contains(title).await?;
        Ok(songs.into_iter().map(Into::into).collect())
    }

    /// Create a new song unless one with the same reference already exists.
    pub async fn create_new_song(&self, data: CreateSongData) -> DomainResult<()> {
        if self
            .song_repo
            .find_by_reference(&data.reference)
            .await?
            .is_some()
        {
            return Err(DomainError::with_field(
                "song already exists",
                ErrorKind::DuplicateValue,
                fields::REFERENCE,
            ));
        }

        self.song_repo
            .insert(NewSong {
                title: data.title,
                reference: data.reference,
            })
            .await?;

        Ok(())
    }
}
