// src/presentation/http/controllers/playlists.rs
use crate::application::services::{CreatePlaylistData, UpdatePlaylistData};
use crate::domain::errors::ErrorKind;
use crate::domain::fields;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validate::{Validator, is_non_blank};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PlaylistListParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub genre: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlaylistRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub is_private: Option<bool>,
}

pub async fn create_playlist(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreatePlaylistRequest>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    let clean = validator
        .chain(payload.user_id > 0, ErrorKind::BadValue, Some(fields::ID))
        .chain(
            is_non_blank(payload.name.as_deref()),
            ErrorKind::MissingField,
            Some(fields::NAME),
        )
        .check(
            is_non_blank(payload.genre.as_deref()),
            ErrorKind::MissingField,
            Some(fields::GENRE),
        );

    if !clean {
        return Ok(validator.into_response());
    }

    let data = CreatePlaylistData {
        name: payload.name.unwrap_or_default(),
        user_id: payload.user_id,
        is_private: payload.is_private,
        genre: payload.genre.unwrap_or_default(),
    };

    state
        .services
        .playlists
        .create_new_playlist(data)
        .await
        .into_http()?;
    Ok(StatusCode::OK.into_response())
}

/// List playlists by like-filter; both patterns default to "%" so an
/// unfiltered call returns everything.
pub async fn list_playlists(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PlaylistListParams>,
) -> HttpResult<Response> {
    let name = params.name.as_deref().unwrap_or("%");
    let genre = params.genre.as_deref().unwrap_or("%");

    let playlists = state
        .services
        .playlists
        .get_playlists_by_filter(name, genre)
        .await
        .into_http()?;
    Ok((StatusCode::OK, Json(playlists)).into_response())
}

pub async fn get_playlist_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    if !validator.check(id > 0, ErrorKind::BadValue, Some(fields::ID)) {
        return Ok(validator.into_response());
    }

    let playlist = state
        .services
        .playlists
        .get_playlist_by_id(id)
        .await
        .into_http()?;
    Ok((StatusCode::OK, Json(playlist)).into_response())
}

pub async fn get_songs_in_playlist(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    if !validator.check(id > 0, ErrorKind::BadValue, Some(fields::PLAYLIST_ID)) {
        return Ok(validator.into_response());
    }

    let songs = state
        .services
        .playlists
        .get_songs_in_playlist(id)
        .await
        .into_http()?;
    Ok((StatusCode::OK, Json(songs)).into_response())
}

pub async fn add_song_to_playlist(
    Extension(state): Extension<HttpState>,
    Path((playlist_id, song_id)): Path<(i64, i64)>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    let clean = validator
        .chain(song_id > 0, ErrorKind::BadValue, Some(fields::SONG_ID))
        .check(playlist_id > 0, ErrorKind::BadValue, Some(fields::PLAYLIST_ID));

    if !clean {
        return Ok(validator.into_response());
    }

    state
        .services
        .playlists
        .add_song_to_playlist(song_id, playlist_id)
        .await
        .into_http()?;
    Ok(StatusCode::OK.into_response())
}

pub async fn update_playlist_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePlaylistRequest>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    if !validator.check(id > 0, ErrorKind::BadValue, Some(fields::ID)) {
        return Ok(validator.into_response());
    }

    let data = UpdatePlaylistData {
        name: payload.name,
        genre: payload.genre,
        is_private: payload.is_private,
    };

    state
        .services
        .playlists
        .update_playlist_by_id(id, data)
        .await
        .into_http()?;
    Ok(StatusCode::OK.into_response())
}

pub async fn delete_playlist(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    if !validator.check(id > 0, ErrorKind::BadValue, Some(fields::ID)) {
        return Ok(validator.into_response());
    }

    state
        .services
        .playlists
        .delete_playlist(id)
        .await
        .into_http()?;
    Ok(StatusCode::OK.into_response())
}

pub async fn remove_song_from_playlist(
    Extension(state): Extension<HttpState>,
    Path(playlist_song_id): Path<i64>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    if !validator.check(
        playlist_song_id > 0,
        ErrorKind::BadValue,
        Some(fields::PLAYLIST_SONG_ID),
    ) {
        return Ok(validator.into_response());
    }

    state
        .services
        .playlists
        .delete_song_in_playlist(playlist_song_id)
        .await
        .into_http()?;
    Ok(StatusCode::OK.into_response())
}
