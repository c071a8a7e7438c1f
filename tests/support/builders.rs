// tests/support/builders.rs
use chrono::{TimeZone, Utc};
use ongaku_core::domain::playlist::{Playlist, PlaylistEntry};
use ongaku_core::domain::room::Room;
use ongaku_core::domain::song::Song;
use ongaku_core::domain::user::User;

pub fn user(id: i64, username: &str, email: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: email.to_string(),
        password_hash: format!("hashed::pw-{username}"),
    }
}

pub fn song(id: i64, title: &str, reference: &str) -> Song {
    Song {
        id,
        title: title.to_string(),
        reference: reference.to_string(),
    }
}

pub fn playlist(id: i64, name: &str, user_id: i64, genre: &str) -> Playlist {
    Playlist {
        id,
        name: name.to_string(),
        user_id,
        total_listens: 0,
        is_private: false,
        genre: genre.to_string(),
        date_created: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn playlist_entry(id: i64, playlist_id: i64, song_id: i64) -> PlaylistEntry {
    PlaylistEntry {
        id,
        playlist_id,
        song_id,
    }
}

pub fn room(id: i64, name: &str, user_id: i64) -> Room {
    Room {
        id,
        name: name.to_string(),
        is_private: false,
        user_id,
        playlist_id: None,
    }
}
