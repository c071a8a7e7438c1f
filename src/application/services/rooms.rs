// src/application/services/rooms.rs
use std::sync::Arc;

use crate::application::dto::RoomDto;
use crate::domain::errors::{DomainError, DomainResult, ErrorKind};
use crate::domain::fields;
use crate::domain::playlist::PlaylistRepository;
use crate::domain::room::{NewRoom, RoomRepository};

pub struct CreateRoomData {
    pub name: String,
    pub user_id: i64,
    pub is_private: bool,
}

pub struct UpdateRoomData {
    pub name: Option<String>,
    pub is_private: Option<bool>,
    pub playlist_id: Option<i64>,
}

pub struct RoomService {
    room_repo: Arc<dyn RoomRepository>,
    playlist_repo: Arc<dyn PlaylistRepository>,
}

impl RoomService {
    pub fn new(
        room_repo: Arc<dyn RoomRepository>,
        playlist_repo: Arc<dyn PlaylistRepository>,
    ) -> Self {
        Self {
            room_repo,
            playlist_repo,
        }
    }

    pub async fn create_new_room(&self, data: CreateRoomData) -> DomainResult<()> {
        self.room_repo
            .insert(NewRoom {
                name: data.name,
                user_id: data.user_id,
                is_private: data.is_private,
            })
            .await?;

        Ok(())
    }

    pub async fn get_room_by_id(&self, id: i64) -> DomainResult<RoomDto> {
        match self.room_repo.find_by_id(id).await? {
            Some(room) => Ok(room.into()),
            None => Err(DomainError::with_field(
                "room does not exist",
                ErrorKind::NotFound,
                fields::ROOM,
            )),
        }
    }

    pub async fn get_all_rooms(&self) -> DomainResult<Vec<RoomDto>> {
        let rooms = self.room_repo.find_all().await?;
        Ok(rooms.into_iter().map(Into::into).collect())
    }

    pub async fn get_rooms_with_filter(&self, name: &str) -> DomainResult<Vec<RoomDto>> {
        let rooms = self.room_repo.find_by_name_prefix(name).await?;
        Ok(rooms.into_iter().map(Into::into).collect())
    }

    /// Update a room. A playlist can only be attached if it exists.
    pub async fn update_room_by_id(&self, id: i64, data: UpdateRoomData) -> DomainResult<()> {
        let Some(mut room) = self.room_repo.find_by_id(id).await? else {
            return Err(DomainError::with_field(
                "room does not exist",
                ErrorKind::NotFound,
                fields::ROOM,
            ));
        };

        if let Some(playlist_id) = data.playlist_id {
            if self.playlist_repo.find_by_id(playlist_id).await?.is_none() {
                return Err(DomainError::with_field(
                    "playlist not found",
                    ErrorKind::NotFound,
                    fields::PLAYLIST_ID,
                ));
            }

            room.playlist_id = Some(playlist_id);
        }

        if let Some(name) = data.name.as_deref().filter(|v| !v.trim().is_empty()) {
            room.name = name.to_string();
        }

        if let Some(is_private) = data.is_private {
            room.is_private = is_private;
        }

        self.room_repo.update(&room).await
    }

    pub async fn delete_room_by_id(&self, id: i64) -> DomainResult<()> {
        if self.room_repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::with_field(
                "room does not exist",
                ErrorKind::NotFound,
                fields::ROOM,
            ));
        }

        self.room_repo.delete_by_id(id).await
    }
}
