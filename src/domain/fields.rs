// src/domain/fields.rs
//! Fixed vocabulary of input field names reported in error bodies.
//!
//! Every validation failure names the field that caused it using one of these
//! constants, so the wire representation stays uniform across resources.

/* user */
pub const ID: &str = "id";
pub const USER: &str = "user";
pub const USERNAME: &str = "username";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const OLD_PASSWORD: &str = "oldPassword";

/* song */
pub const SONG: &str = "song";
pub const SONG_ID: &str = "songId";
pub const TITLE: &str = "title";
pub const REFERENCE: &str = "reference";

/* playlist */
pub const PLAYLIST: &str = "playlist";
pub const PLAYLIST_ID: &str = "playlistId";
pub const PLAYLIST_SONG_ID: &str = "playlistSongId";
pub const NAME: &str = "name";
pub const GENRE: &str = "genre";

/* room */
pub const ROOM: &str = "room";

/* password reset */
pub const TOKEN: &str = "token";
