pub mod entity;
pub mod repository;

pub use entity::{NewPlaylist, NewPlaylistEntry, Playlist, PlaylistEntry};
pub use repository::{PlaylistEntryRepository, PlaylistRepository};
