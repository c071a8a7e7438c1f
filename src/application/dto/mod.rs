pub mod password_reset;
pub mod playlists;
pub mod rooms;
pub mod songs;
pub mod users;

pub use password_reset::VerifiedResetDto;
pub use playlists::PlaylistDto;
pub use rooms::RoomDto;
pub use songs::SongDto;
pub use users::UserDto;
