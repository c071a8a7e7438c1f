// src/application/services/playlists.rs
use std::sync::Arc;

use crate::application::dto::{PlaylistDto, SongDto};
use crate::application::ports::time::Clock;
use crate::domain::errors::{DomainError, DomainResult, ErrorKind};
use crate::domain::fields;
use crate::domain::playlist::{
    NewPlaylist, NewPlaylistEntry, PlaylistEntryRepository, PlaylistRepository,
};
use crate::domain::song::SongRepository;

pub struct CreatePlaylistData {
    pub name: String,
    pub user_id: i64,
    pub is_private: bool,
    pub genre: String,
}

pub struct UpdatePlaylistData {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub is_private: Option<bool>,
}

pub struct PlaylistService {
    playlist_repo: Arc<dyn PlaylistRepository>,
    playlist_entry_repo: Arc<dyn PlaylistEntryRepository>,
    song_repo: Arc<dyn SongRepository>,
    clock: Arc<dyn Clock>,
}

impl PlaylistService {
    pub fn new(
        playlist_repo: Arc<dyn PlaylistRepository>,
        playlist_entry_repo: Arc<dyn PlaylistEntryRepository>,
        song_repo: Arc<dyn SongRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            playlist_repo,
            playlist_entry_repo,
            song_repo,
            clock,
        }
    }

    pub async fn create_new_playlist(&self, data: CreatePlaylistData) -> DomainResult<()> {
        self.playlist_repo
            .insert(NewPlaylist {
                name: data.name,
                user_id: data.user_id,
                is_private: data.is_private,
                genre: data.genre,
                date_created: self.clock.now(),
            })
            .await?;

        Ok(())
    }

    pub async fn get_playlist_by_id(&self, id: i64) -> DomainResult<PlaylistDto> {
        match self.playlist_repo.find_by_id(id).await? {
            Some(playlist) => Ok(playlist.into()),
            None => Err(DomainError::with_field(
                "playlist not found",
                ErrorKind::NotFound,
                fields::PLAYLIST,
            )),
        }
    }

    pub async fn get_playlists_by_filter(
        &self,
        name: &str,
        genre: &str,
    ) -> DomainResult<Vec<PlaylistDto>> {
        let playlists = self.playlist_repo.find_by_filter(name, genre).await?;
        Ok(playlists.into_iter().map(Into::into).collect())
    }

    /// Attach an existing song to an existing playlist. The playlist is
    /// checked before the song so its absence wins when both are missing.
    pub async fn add_song_to_playlist(&self, song_id: i64, playlist_id: i64) -> DomainResult<()> {
        let song = self.song_repo.find_by_id(song_id).await?;
        let playlist = self.playlist_repo.find_by_id(playlist_id).await?;

        if playlist.is_none() {
            return Err(DomainError::with_field(
                "playlist not found",
                ErrorKind::NotFound,
                fields::PLAYLIST_ID,
            ));
        }

        if song.is_none() {
            return Err(DomainError::with_field(
                "song not found",
                ErrorKind::NotFound,
                fields::SONG_ID,
            ));
        }

        self.playlist_entry_repo
            .insert(NewPlaylistEntry {
                playlist_id,
                song_id,
            })
            .await?;

        Ok(())
    }

    pub async fn get_songs_in_playlist(&self, id: i64) -> DomainResult<Vec<SongDto>> {
        let entries = self.playlist_entry_repo.find_by_playlist_id(id).await?;

        if entries.is_empty() {
            return Err(DomainError::with_field(
                "playlist not found",
                ErrorKind::NotFound,
                fields::PLAYLIST,
            ));
        }

        let mut songs = Vec::with_capacity(entries.len());
        for entry in entries {
            let song = self.song_repo.find_by_id(entry.song_id).await?.ok_or_else(|| {
                DomainError::new(
                    format!("playlist entry {} references missing song {}", entry.id, entry.song_id),
                    ErrorKind::Internal,
                )
            })?;
            songs.push(song.into());
        }

        Ok(songs)
    }

    pub async fn update_playlist_by_id(
        &self,
        id: i64,
        data: UpdatePlaylistData,
    ) -> DomainResult<()> {
        let Some(mut playlist) = self.playlist_repo.find_by_id(id).await? else {
            return Err(DomainError::with_field(
                "playlist does not exist",
                ErrorKind::NotFound,
                fields::PLAYLIST,
            ));
        };

        if let Some(name) = non_blank(data.name.as_deref()) {
            playlist.name = name.to_string();
        }

        if let Some(genre) = non_blank(data.genre.as_deref()) {
            playlist.genre = genre.to_string();
        }

        if let Some(is_private) = data.is_private {
            playlist.is_private = is_private;
        }

        self.playlist_repo.update(&playlist).await
    }

    pub async fn delete_playlist(&self, id: i64) -> DomainResult<()> {
        if self.playlist_repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::with_field(
                "playlist not found",
                ErrorKind::NotFound,
                fields::PLAYLIST_ID,
            ));
        }

        self.playlist_repo.delete_by_id(id).await
    }

    /// Remove a single song membership by its own id.
    pub async fn delete_song_in_playlist(&self, playlist_song_id: i64) -> DomainResult<()> {
        if self
            .playlist_entry_repo
            .find_by_id(playlist_song_id)
            .await?
            .is_none()
        {
            return Err(DomainError::with_field(
                "playlist song not found",
                ErrorKind::NotFound,
                fields::PLAYLIST_SONG_ID,
            ));
        }

        self.playlist_entry_repo.delete_by_id(playlist_song_id).await
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
