// src/presentation/http/routes.rs
use crate::domain::errors::ErrorKind;
use crate::presentation::http::controllers::{password_reset, playlists, rooms, songs, users};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validate::Validator;
use axum::{
    Extension, Json, Router,
    http::Method,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/users",
            get(users::list_users).post(users::register_user),
        )
        .route(
            "/api/v1/users/{id}",
            get(users::get_user_by_id)
                .put(users::update_user_by_id)
                .delete(users::delete_user_by_id),
        )
        .route(
            "/api/v1/users/{id}/playlists",
            get(users::get_playlists_for_user),
        )
        .route(
            "/api/v1/songs",
            get(songs::list_songs).post(songs::create_song),
        )
        .route("/api/v1/songs/{id}", get(songs::get_song_by_id))
        .route(
            "/api/v1/playlists",
            get(playlists::list_playlists).post(playlists::create_playlist),
        )
        .route(
            "/api/v1/playlists/{id}",
            get(playlists::get_playlist_by_id)
                .put(playlists::update_playlist_by_id)
                .delete(playlists::delete_playlist),
        )
        .route(
            "/api/v1/playlists/{id}/songs",
            get(playlists::get_songs_in_playlist),
        )
        .route(
            "/api/v1/playlists/{playlist_id}/songs/{song_id}",
            post(playlists::add_song_to_playlist),
        )
        .route(
            "/api/v1/playlists/songs/{playlist_song_id}",
            delete(playlists::remove_song_from_playlist),
        )
        .route(
            "/api/v1/rooms",
            get(rooms::list_rooms).post(rooms::create_room),
        )
        .route(
            "/api/v1/rooms/{id}",
            get(rooms::get_room_by_id)
                .put(rooms::update_room_by_id)
                .delete(rooms::delete_room_by_id),
        )
        .route(
            "/api/v1/password/forgot",
            post(password_reset::forgot_password),
        )
        .route(
            "/api/v1/password/reset",
            get(password_reset::verify_token).post(password_reset::reset_password),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

/// A panicking handler must not leak its payload; it renders the same way
/// any other unanticipated failure does.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "request handler panicked");

    let mut validator = Validator::new();
    validator.chain(false, ErrorKind::Internal, None);
    validator.into_response()
}
