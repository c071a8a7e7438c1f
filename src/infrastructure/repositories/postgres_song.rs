// src/infrastructure/repositories/postgres_song.rs
use super::{map_sqlx, postgres_user::escape_like};
use crate::domain::errors::DomainResult;
use crate::domain::song::{NewSong, Song, SongRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresSongRepository {
    pool: PgPool,
}

impl PostgresSongRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SongRow {
    id: i64,
    title: String,
    reference: String,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Song {
            id: row.id,
            title: row.title,
            reference: row.reference,
        }
    }
}

#[async_trait]
impl SongRepository for PostgresSongRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Song>> {
        let row =
            sqlx::query_as::<_, SongRow>("SELECT id, title, reference FROM songs WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> DomainResult<Vec<Song>> {
        let rows =
            sqlx::query_as::<_, SongRow>("SELECT id, title, reference FROM songs ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_title_contains(&self, fragment: &str) -> DomainResult<Vec<Song>> {
        let pattern = format!("%{}%", escape_like(fragment));
        let rows = sqlx::query_as::<_, SongRow>(
            "SELECT id, title, reference FROM songs WHERE title LIKE $1 ORDER BY id",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_reference(&self, reference: &str) -> DomainResult<Option<Song>> {
        let row = sqlx::query_as::<_, SongRow>(
            "SELECT id, title, reference FROM songs WHERE reference = $1",
        )
        .bind(reference)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, new_song: NewSong) -> DomainResult<Song> {
        let row = sqlx::query_as::<_, SongRow>(
            "INSERT INTO songs (title, reference)
             VALUES ($1, $2)
             RETURNING id, title, reference",
        )
        .bind(&new_song.title)
        .bind(&new_song.reference)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }
}
