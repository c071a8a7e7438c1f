// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use ongaku_core::application::ports::mailer::Mailer;
use ongaku_core::application::ports::security::PasswordHasher;
use ongaku_core::application::ports::time::Clock;
use ongaku_core::application::ports::util::ResetTokenGenerator;
use ongaku_core::domain::errors::{DomainError, DomainResult, ErrorKind};
use ongaku_core::domain::password_reset::{PasswordReset, PasswordResetRepository};
use ongaku_core::domain::playlist::{
    NewPlaylist, NewPlaylistEntry, Playlist, PlaylistEntry, PlaylistEntryRepository,
    PlaylistRepository,
};
use ongaku_core::domain::room::{NewRoom, Room, RoomRepository};
use ongaku_core::domain::song::{NewSong, Song, SongRepository};
use ongaku_core::domain::user::{NewUser, User, UserRepository};

fn sorted_by_id<T, F: Fn(&T) -> i64>(mut items: Vec<T>, id_of: F) -> Vec<T> {
    items.sort_by_key(|item| id_of(item));
    items
}

// ---------------------------------------------------------------------------
// repositories

#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<UserStore>,
}

#[derive(Default)]
struct UserStore {
    users: HashMap<i64, User>,
    next_id: i64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0);
        Self {
            inner: Mutex::new(UserStore {
                users: users.into_iter().map(|u| (u.id, u)).collect(),
                next_id,
            }),
        }
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.inner.lock().unwrap().users.get(&id).cloned()
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let store = self.inner.lock().unwrap();
        Ok(sorted_by_id(
            store.users.values().cloned().collect(),
            |u| u.id,
        ))
    }

    async fn find_by_username_prefix(&self, prefix: &str) -> DomainResult<Vec<User>> {
        let store = self.inner.lock().unwrap();
        Ok(sorted_by_id(
            store
                .users
                .values()
                .filter(|u| u.username.starts_with(prefix))
                .cloned()
                .collect(),
            |u| u.id,
        ))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let store = self.inner.lock().unwrap();
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> DomainResult<Vec<User>> {
        let store = self.inner.lock().unwrap();
        Ok(sorted_by_id(
            store
                .users
                .values()
                .filter(|u| {
                    u.username.eq_ignore_ascii_case(username)
                        || u.email.eq_ignore_ascii_case(email)
                })
                .cloned()
                .collect(),
            |u| u.id,
        ))
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let user = User {
            id: store.next_id,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
        };
        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        store.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        self.inner.lock().unwrap().users.remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySongRepo {
    inner: Mutex<SongStore>,
}

#[derive(Default)]
struct SongStore {
    songs: HashMap<i64, Song>,
    next_id: i64,
}

impl InMemorySongRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(songs: Vec<Song>) -> Self {
        let next_id = songs.iter().map(|s| s.id).max().unwrap_or(0);
        Self {
            inner: Mutex::new(SongStore {
                songs: songs.into_iter().map(|s| (s.id, s)).collect(),
                next_id,
            }),
        }
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().songs.len()
    }
}

#[async_trait]
impl SongRepository for InMemorySongRepo {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Song>> {
        Ok(self.inner.lock().unwrap().songs.get(&id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Song>> {
        let store = self.inner.lock().unwrap();
        Ok(sorted_by_id(
            store.songs.values().cloned().collect(),
            |s| s.id,
        ))
    }

    async fn find_by_title_contains(&self, fragment: &str) -> DomainResult<Vec<Song>> {
        let store = self.inner.lock().unwrap();
        Ok(sorted_by_id(
            store
                .songs
                .values()
                .filter(|s| s.title.contains(fragment))
                .cloned()
                .collect(),
            |s| s.id,
        ))
    }

    async fn find_by_reference(&self, reference: &str) -> DomainResult<Option<Song>> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .songs
            .values()
            .find(|s| s.reference == reference)
            .cloned())
    }

    async fn insert(&self, new_song: NewSong) -> DomainResult<Song> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let song = Song {
            id: store.next_id,
            title: new_song.title,
            reference: new_song.reference,
        };
        store.songs.insert(song.id, song.clone());
        Ok(song)
    }
}

/// Song repository whose every method panics, for exercising the panic
/// containment layer end to end.
pub struct PanickingSongRepo;

#[async_trait]
impl SongRepository for PanickingSongRepo {
    async fn find_by_id(&self, _id: i64) -> DomainResult<Option<Song>> {
        panic!("song repository exploded")
    }

    async fn find_all(&self) -> DomainResult<Vec<Song>> {
        panic!("song repository exploded")
    }

    async fn find_by_title_contains(&self, _fragment: &str) -> DomainResult<Vec<Song>> {
        panic!("song repository exploded")
    }

    async fn find_by_reference(&self, _reference: &str) -> DomainResult<Option<Song>> {
        panic!("song repository exploded")
    }

    async fn insert(&self, _new_song: NewSong) -> DomainResult<Song> {
        panic!("song repository exploded")
    }
}

#[derive(Default)]
pub struct InMemoryPlaylistRepo {
    inner: Mutex<PlaylistStore>,
}

#[derive(Default)]
struct PlaylistStore {
    playlists: HashMap<i64, Playlist>,
    next_id: i64,
}

impl InMemoryPlaylistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(playlists: Vec<Playlist>) -> Self {
        let next_id = playlists.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            inner: Mutex::new(PlaylistStore {
                playlists: playlists.into_iter().map(|p| (p.id, p)).collect(),
                next_id,
            }),
        }
    }

    pub fn get(&self, id: i64) -> Option<Playlist> {
        self.inner.lock().unwrap().playlists.get(&id).cloned()
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().playlists.len()
    }
}

/// "%" matches everything, anything else must match exactly; enough pattern
/// support for these tests.
fn like_matches(pattern: &str, value: &str) -> bool {
    pattern == "%" || pattern == value
}

#[async_trait]
impl PlaylistRepository for InMemoryPlaylistRepo {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Playlist>> {
        Ok(self.get(id))
    }

    async fn find_by_filter(&self, name: &str, genre: &str) -> DomainResult<Vec<Playlist>> {
        let store = self.inner.lock().unwrap();
        Ok(sorted_by_id(
            store
                .playlists
                .values()
                .filter(|p| like_matches(name, &p.name) && like_matches(genre, &p.genre))
                .cloned()
                .collect(),
            |p| p.id,
        ))
    }

    async fn find_by_user_id(&self, user_id: i64) -> DomainResult<Vec<Playlist>> {
        let store = self.inner.lock().unwrap();
        Ok(sorted_by_id(
            store
                .playlists
                .values()
                .filter(|p| p.user_id == user_id)
                .cloned()
                .collect(),
            |p| p.id,
        ))
    }

    async fn insert(&self, new_playlist: NewPlaylist) -> DomainResult<Playlist> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let playlist = Playlist {
            id: store.next_id,
            name: new_playlist.name,
            user_id: new_playlist.user_id,
            total_listens: 0,
            is_private: new_playlist.is_private,
            genre: new_playlist.genre,
            date_created: new_playlist.date_created,
        };
        store.playlists.insert(playlist.id, playlist.clone());
        Ok(playlist)
    }

    async fn update(&self, playlist: &Playlist) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        store.playlists.insert(playlist.id, playlist.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        self.inner.lock().unwrap().playlists.remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPlaylistEntryRepo {
    inner: Mutex<EntryStore>,
}

#[derive(Default)]
struct EntryStore {
    entries: HashMap<i64, PlaylistEntry>,
    next_id: i64,
}

impl InMemoryPlaylistEntryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(entries: Vec<PlaylistEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            inner: Mutex::new(EntryStore {
                entries: entries.into_iter().map(|e| (e.id, e)).collect(),
                next_id,
            }),
        }
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }
}

#[async_trait]
impl PlaylistEntryRepository for InMemoryPlaylistEntryRepo {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<PlaylistEntry>> {
        Ok(self.inner.lock().unwrap().entries.get(&id).cloned())
    }

    async fn find_by_playlist_id(&self, playlist_id: i64) -> DomainResult<Vec<PlaylistEntry>> {
        let store = self.inner.lock().unwrap();
        Ok(sorted_by_id(
            store
                .entries
                .values()
                .filter(|e| e.playlist_id == playlist_id)
                .cloned()
                .collect(),
            |e| e.id,
        ))
    }

    async fn insert(&self, new_entry: NewPlaylistEntry) -> DomainResult<PlaylistEntry> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let entry = PlaylistEntry {
            id: store.next_id,
            playlist_id: new_entry.playlist_id,
            song_id: new_entry.song_id,
        };
        store.entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        self.inner.lock().unwrap().entries.remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryRoomRepo {
    inner: Mutex<RoomStore>,
}

#[derive(Default)]
struct RoomStore {
    rooms: HashMap<i64, Room>,
    next_id: i64,
}

impl InMemoryRoomRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(rooms: Vec<Room>) -> Self {
        let next_id = rooms.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            inner: Mutex::new(RoomStore {
                rooms: rooms.into_iter().map(|r| (r.id, r)).collect(),
                next_id,
            }),
        }
    }

    pub fn get(&self, id: i64) -> Option<Room> {
        self.inner.lock().unwrap().rooms.get(&id).cloned()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepo {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Room>> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        let store = self.inner.lock().unwrap();
        Ok(sorted_by_id(
            store.rooms.values().cloned().collect(),
            |r| r.id,
        ))
    }

    async fn find_by_name_prefix(&self, prefix: &str) -> DomainResult<Vec<Room>> {
        let store = self.inner.lock().unwrap();
        Ok(sorted_by_id(
            store
                .rooms
                .values()
                .filter(|r| r.name.starts_with(prefix))
                .cloned()
                .collect(),
            |r| r.id,
        ))
    }

    async fn insert(&self, new_room: NewRoom) -> DomainResult<Room> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let room = Room {
            id: store.next_id,
            name: new_room.name,
            is_private: new_room.is_private,
            user_id: new_room.user_id,
            playlist_id: None,
        };
        store.rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn update(&self, room: &Room) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        store.rooms.insert(room.id, room.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        self.inner.lock().unwrap().rooms.remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPasswordResetRepo {
    inner: Mutex<HashMap<i64, PasswordReset>>,
}

impl InMemoryPasswordResetRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user_id: i64) -> Option<PasswordReset> {
        self.inner.lock().unwrap().get(&user_id).cloned()
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

#[async_trait]
impl PasswordResetRepository for InMemoryPasswordResetRepo {
    async fn find_by_user_id(&self, user_id: i64) -> DomainResult<Option<PasswordReset>> {
        Ok(self.get(user_id))
    }

    async fn upsert(&self, reset: PasswordReset) -> DomainResult<()> {
        self.inner.lock().unwrap().insert(reset.user_id, reset);
        Ok(())
    }

    async fn delete_by_user_id(&self, user_id: i64) -> DomainResult<()> {
        self.inner.lock().unwrap().remove(&user_id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ports

#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<SentMail>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> DomainResult<()> {
        self.sent.lock().unwrap().push(SentMail {
            to: recipient.to_string(),
            subject: subject.to_string(),
            body: html_body.to_string(),
        });
        Ok(())
    }
}

/// Mailer standing in for a relay that rejects everything.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _recipient: &str, _subject: &str, _html_body: &str) -> DomainResult<()> {
        Err(DomainError::new("smtp relay refused", ErrorKind::Internal))
    }
}

pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub struct FixedTokenGenerator {
    token: String,
}

impl FixedTokenGenerator {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl ResetTokenGenerator for FixedTokenGenerator {
    fn generate(&self) -> String {
        self.token.clone()
    }
}

/// Deterministic stand-in for the argon2 hasher.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        Ok(format!("hashed::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> DomainResult<bool> {
        Ok(expected_hash == format!("hashed::{password}"))
    }
}
