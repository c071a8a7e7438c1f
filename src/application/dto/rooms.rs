use crate::domain::room::Room;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i64,
    pub name: String,
    pub is_private: bool,
    pub user_id: i64,
    pub playlist_id: Option<i64>,
}

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            name: room.name,
            is_private: room.is_private,
            user_id: room.user_id,
            playlist_id: room.playlist_id,
        }
    }
}
