// src/infrastructure/repositories/postgres_playlist.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::playlist::{
    NewPlaylist, NewPlaylistEntry, Playlist, PlaylistEntry, PlaylistEntryRepository,
    PlaylistRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPlaylistRepository {
    pool: PgPool,
}

impl PostgresPlaylistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PlaylistRow {
    id: i64,
    name: String,
    user_id: i64,
    total_listens: i32,
    is_private: bool,
    genre: String,
    date_created: DateTime<Utc>,
}

impl From<PlaylistRow> for Playlist {
    fn from(row: PlaylistRow) -> Self {
        Playlist {
            id: row.id,
            name: row.name,
            user_id: row.user_id,
            total_listens: row.total_listens,
            is_private: row.is_private,
            genre: row.genre,
            date_created: row.date_created,
        }
    }
}

#[async_trait]
impl PlaylistRepository for PostgresPlaylistRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Playlist>> {
        let row = sqlx::query_as::<_, PlaylistRow>(
            "SELECT id, name, user_id, total_listens, is_private, genre, date_created
             FROM playlists WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_filter(&self, name: &str, genre: &str) -> DomainResult<Vec<Playlist>> {
        let rows = sqlx::query_as::<_, PlaylistRow>(
            "SELECT id, name, user_id, total_listens, is_private, genre, date_created
             FROM playlists WHERE name LIKE $1 AND genre LIKE $2 ORDER BY id",
        )
        .bind(name)
        .bind(genre)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_user_id(&self, user_id: i64) -> DomainResult<Vec<Playlist>> {
        let rows = sqlx::query_as::<_, PlaylistRow>(
            "SELECT id, name, user_id, total_listens, is_private, genre, date_created
             FROM playlists WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new_playlist: NewPlaylist) -> DomainResult<Playlist> {
        let row = sqlx::query_as::<_, PlaylistRow>(
            "INSERT INTO playlists (name, user_id, is_private, genre, date_created)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, user_id, total_listens, is_private, genre, date_created",
        )
        .bind(&new_playlist.name)
        .bind(new_playlist.user_id)
        .bind(new_playlist.is_private)
        .bind(&new_playlist.genre)
        .bind(new_playlist.date_created)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn update(&self, playlist: &Playlist) -> DomainResult<()> {
        sqlx::query(
            "UPDATE playlists
             SET name = $2, total_listens = $3, is_private = $4, genre = $5
             WHERE id = $1",
        )
        .bind(playlist.id)
        .bind(&playlist.name)
        .bind(playlist.total_listens)
        .bind(playlist.is_private)
        .bind(&playlist.genre)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresPlaylistEntryRepository {
    pool: PgPool,
}

impl PostgresPlaylistEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PlaylistEntryRow {
    id: i64,
    playlist_id: i64,
    song_id: i64,
}

impl From<PlaylistEntryRow> for PlaylistEntry {
    fn from(row: PlaylistEntryRow) -> Self {
        PlaylistEntry {
            id: row.id,
            playlist_id: row.playlist_id,
            song_id: row.song_id,
        }
    }
}

#[async_trait]
impl PlaylistEntryRepository for PostgresPlaylistEntryRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<PlaylistEntry>> {
        let row = sqlx::query_as::<_, PlaylistEntryRow>(
            "SELECT id, playlist_id, song_id FROM playlist_songs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_playlist_id(&self, playlist_id: i64) -> DomainResult<Vec<PlaylistEntry>> {
        let rows = sqlx::query_as::<_, PlaylistEntryRow>(
            "SELECT id, playlist_id, song_id FROM playlist_songs
             WHERE playlist_id = $1 ORDER BY id",
        )
        .bind(playlist_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new_entry: NewPlaylistEntry) -> DomainResult<PlaylistEntry> {
        let row = sqlx::query_as::<_, PlaylistEntryRow>(
            "INSERT INTO playlist_songs (playlist_id, song_id)
             VALUES ($1, $2)
             RETURNING id, playlist_id, song_id",
        )
        .bind(new_entry.playlist_id)
        .bind(new_entry.song_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        sqlx::query("DELETE FROM playlist_songs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(())
    }
}
