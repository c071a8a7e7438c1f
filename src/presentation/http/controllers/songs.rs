// src/presentation/http/controllers/songs.rs
use crate::application::services::CreateSongData;
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
pub struct SongListParams {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSongRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

pub async fn get_song_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    if !validator.check(id > 0, ErrorKind::BadValue, Some(fields::ID)) {
        return Ok(validator.into_response());
    }

    let song = state.services.songs.get_song_by_id(id).await.into_http()?;
    Ok((StatusCode::OK, Json(song)).into_response())
}

pub async fn list_songs(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SongListParams>,
) -> HttpResult<Response> {
    let songs = match params.title.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(title) => state.services.songs.get_songs_by_filter(title).await,
        None => state.services.songs.get_all_songs().await,
    }
    .into_http()?;

    Ok((StatusCode::OK, Json(songs)).into_response())
}

pub async fn create_song(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateSongRequest>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    let clean = validator
        .chain(
            is_non_blank(payload.title.as_deref()),
            ErrorKind::MissingField,
            Some(fields::TITLE),
        )
        .check(
            is_non_blank(payload.reference.as_deref()),
            ErrorKind::MissingField,
            Some(fields::REFERENCE),
        );

    if !clean {
        return Ok(validator.into_response());
    }

    let data = CreateSongData {
        title: payload.title.unwrap_or_default(),
        reference: payload.reference.unwrap_or_default(),
    };

    state.services.songs.create_new_song(data).await.into_http()?;
    Ok(StatusCode::OK.into_response())
}
