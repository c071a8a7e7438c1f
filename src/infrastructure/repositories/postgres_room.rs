// src/infrastructure/repositories/postgres_room.rs
use super::{map_sqlx, postgres_user::escape_like};
use crate::domain::errors::DomainResult;
use crate::domain::room::{NewRoom, Room, RoomRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresRoomRepository {
    pool: PgPool,
}

impl PostgresRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoomRow {
    id: i64,
    name: String,
    is_private: bool,
    user_id: i64,
    playlist_id: Option<i64>,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room {
            id: row.id,
            name: row.name,
            is_private: row.is_private,
            user_id: row.user_id,
            playlist_id: row.playlist_id,
        }
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Room>> {
        let row = sqlx::query_as::<_, RoomRow>(
            "SELECT id, name, is_private, user_id, playlist_id FROM rooms WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, RoomRow>(
            "SELECT id, name, is_private, user_id, playlist_id FROM rooms ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_name_prefix(&self, prefix: &str) -> DomainResult<Vec<Room>> {
        let pattern = format!("{}%", escape_like(prefix));
        let rows = sqlx::query_as::<_, RoomRow>(
            "SELECT id, name, is_private, user_id, playlist_id FROM rooms
             WHERE name LIKE $1 ORDER BY id",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new_room: NewRoom) -> DomainResult<Room> {
        let row = sqlx::query_as::<_, RoomRow>(
            "INSERT INTO rooms (name, is_private, user_id)
             VALUES ($1, $2, $3)
             RETURNING id, name, is_private, user_id, playlist_id",
        )
        .bind(&new_room.name)
        .bind(new_room.is_private)
        .bind(new_room.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn update(&self, room: &Room) -> DomainResult<()> {
        sqlx::query(
            "UPDATE rooms SET name = $2, is_private = $3, playlist_id = $4 WHERE id = $1",
        )
        .bind(room.id)
        .bind(&room.name)
        .bind(room.is_private)
        .bind(room.playlist_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(())
    }
}
