pub mod password_reset;
pub mod playlists;
pub mod rooms;
pub mod songs;
pub mod users;
