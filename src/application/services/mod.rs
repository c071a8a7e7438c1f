// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{
    mailer::Mailer, security::PasswordHasher, time::Clock, util::ResetTokenGenerator,
};
use crate::domain::{
    password_reset::PasswordResetRepository,
    playlist::{PlaylistEntryRepository, PlaylistRepository},
    room::RoomRepository,
    song::SongRepository,
    user::UserRepository,
};

pub mod password_reset;
pub mod playlists;
pub mod rooms;
pub mod songs;
pub mod users;

pub use password_reset::{PasswordResetConfig, PasswordResetService, ResetPasswordData};
pub use playlists::{CreatePlaylistData, PlaylistService, UpdatePlaylistData};
pub use rooms::{CreateRoomData, RoomService, UpdateRoomData};
pub use songs::{CreateSongData, SongService};
pub use users::{RegisterUserData, UpdateUserData, UserService};

pub struct ApplicationServices {
    pub users: Arc<UserService>,
    pub songs: Arc<SongService>,
    pub playlists: Arc<PlaylistService>,
    pub rooms: Arc<RoomService>,
    pub password_resets: Arc<PasswordResetService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        song_repo: Arc<dyn SongRepository>,
        playlist_repo: Arc<dyn PlaylistRepository>,
        playlist_entry_repo: Arc<dyn PlaylistEntryRepository>,
        room_repo: Arc<dyn RoomRepository>,
        reset_repo: Arc<dyn PasswordResetRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        reset_tokens: Arc<dyn ResetTokenGenerator>,
        reset_config: PasswordResetConfig,
    ) -> Self {
        let users = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&playlist_repo),
            Arc::clone(&password_hasher),
        ));

        let songs = Arc::new(SongService::new(Arc::clone(&song_repo)));

        let playlists = Arc::new(PlaylistService::new(
            Arc::clone(&playlist_repo),
            Arc::clone(&playlist_entry_repo),
            Arc::clone(&song_repo),
            Arc::clone(&clock),
        ));

        let rooms = Arc::new(RoomService::new(
            Arc::clone(&room_repo),
            Arc::clone(&playlist_repo),
        ));

        let password_resets = Arc::new(PasswordResetService::new(
            reset_repo,
            user_repo,
            password_hasher,
            mailer,
            clock,
            reset_tokens,
            reset_config,
        ));

        Self {
            users,
            songs,
            playlists,
            rooms,
            password_resets,
        }
    }
}
