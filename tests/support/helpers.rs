// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use chrono::{Duration, TimeZone, Utc};
use serde_json::Value;

use super::mocks;
use ongaku_core::application::ports::{
    mailer::Mailer, security::PasswordHasher, time::Clock, util::ResetTokenGenerator,
};
use ongaku_core::application::services::{ApplicationServices, PasswordResetConfig};
use ongaku_core::domain::{
    password_reset::PasswordResetRepository,
    playlist::{PlaylistEntryRepository, PlaylistRepository},
    room::RoomRepository,
    song::SongRepository,
    user::UserRepository,
};
use ongaku_core::presentation::http::{routes::build_router, state::HttpState};

pub const TEST_TOKEN: &str = "reset-token-1";
pub const TEST_BASE_URL: &str = "http://localhost:8080";

/// Concrete handles to every dependency behind a test router, so tests can
/// seed and inspect state while the services see trait objects.
pub struct TestDeps {
    pub user_repo: Arc<mocks::InMemoryUserRepo>,
    pub song_repo: Arc<mocks::InMemorySongRepo>,
    pub playlist_repo: Arc<mocks::InMemoryPlaylistRepo>,
    pub playlist_entry_repo: Arc<mocks::InMemoryPlaylistEntryRepo>,
    pub room_repo: Arc<mocks::InMemoryRoomRepo>,
    pub reset_repo: Arc<mocks::InMemoryPasswordResetRepo>,
    pub mailer: Arc<mocks::RecordingMailer>,
    pub clock: Arc<mocks::FixedClock>,
}

impl TestDeps {
    pub fn new() -> Self {
        Self {
            user_repo: Arc::new(mocks::InMemoryUserRepo::new()),
            song_repo: Arc::new(mocks::InMemorySongRepo::new()),
            playlist_repo: Arc::new(mocks::InMemoryPlaylistRepo::new()),
            playlist_entry_repo: Arc::new(mocks::InMemoryPlaylistEntryRepo::new()),
            room_repo: Arc::new(mocks::InMemoryRoomRepo::new()),
            reset_repo: Arc::new(mocks::InMemoryPasswordResetRepo::new()),
            mailer: Arc::new(mocks::RecordingMailer::new()),
            clock: Arc::new(mocks::FixedClock::new(
                Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            )),
        }
    }
}

pub fn reset_config() -> PasswordResetConfig {
    PasswordResetConfig {
        public_base_url: TEST_BASE_URL.to_string(),
        token_ttl: Duration::minutes(30),
    }
}

pub fn build_test_state(deps: &TestDeps) -> HttpState {
    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&deps.user_repo) as Arc<dyn UserRepository>,
        Arc::clone(&deps.song_repo) as Arc<dyn SongRepository>,
        Arc::clone(&deps.playlist_repo) as Arc<dyn PlaylistRepository>,
        Arc::clone(&deps.playlist_entry_repo) as Arc<dyn PlaylistEntryRepository>,
        Arc::clone(&deps.room_repo) as Arc<dyn RoomRepository>,
        Arc::clone(&deps.reset_repo) as Arc<dyn PasswordResetRepository>,
        Arc::new(mocks::PlainPasswordHasher) as Arc<dyn PasswordHasher>,
        Arc::clone(&deps.mailer) as Arc<dyn Mailer>,
        Arc::clone(&deps.clock) as Arc<dyn Clock>,
        Arc::new(mocks::FixedTokenGenerator::new(TEST_TOKEN)) as Arc<dyn ResetTokenGenerator>,
        reset_config(),
    ));

    HttpState { services }
}

pub fn make_test_router(deps: &TestDeps) -> Router {
    build_router(build_test_state(deps))
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn assert_error_response(response: Response, status: StatusCode, expected_body: Value) {
    assert_eq!(response.status(), status);
    assert_eq!(body_json(response).await, expected_body);
}

pub async fn assert_ok_empty(response: Response) {
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());
}
