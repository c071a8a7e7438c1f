// src/domain/room/entity.rs

/// A listening room. The playlist is optional; a room can be created empty
/// and pointed at a playlist later.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub is_private: bool,
    pub user_id: i64,
    pub playlist_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewRoom {
    pub name: String,
    pub is_private: bool,
    pub user_id: i64,
}
