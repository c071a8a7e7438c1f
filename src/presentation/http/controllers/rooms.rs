// src/presentation/http/controllers/rooms.rs
use crate::application::services::{CreateRoomData, UpdateRoomData};
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
pub struct RoomListParams {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub is_private: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub playlist_id: Option<i64>,
}

pub async fn create_room(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateRoomRequest>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    let clean = validator
        .chain(payload.user_id > 0, ErrorKind::BadValue, Some(fields::ID))
        .check(
            is_non_blank(payload.name.as_deref()),
            ErrorKind::MissingField,
            Some(fields::NAME),
        );

    if !clean {
        return Ok(validator.into_response());
    }

    let data = CreateRoomData {
        name: payload.name.unwrap_or_default(),
        user_id: payload.user_id,
        is_private: payload.is_private,
    };

    state.services.rooms.create_new_room(data).await.into_http()?;
    Ok(StatusCode::OK.into_response())
}

pub async fn get_room_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    if !validator.check(id > 0, ErrorKind::BadValue, Some(fields::ID)) {
        return Ok(validator.into_response());
    }

    let room = state.services.rooms.get_room_by_id(id).await.into_http()?;
    Ok((StatusCode::OK, Json(room)).into_response())
}

pub async fn list_rooms(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RoomListParams>,
) -> HttpResult<Response> {
    let rooms = match params.name.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(name) => state.services.rooms.get_rooms_with_filter(name).await,
        None => state.services.rooms.get_all_rooms().await,
    }
    .into_http()?;

    Ok((StatusCode::OK, Json(rooms)).into_response())
}

pub async fn update_room_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRoomRequest>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    if !validator.check(id > 0, ErrorKind::BadValue, Some(fields::ID)) {
        return Ok(validator.into_response());
    }

    let data = UpdateRoomData {
        name: payload.name,
        is_private: payload.is_private,
        playlist_id: payload.playlist_id,
    };

    state
        .services
        .rooms
        .update_room_by_id(id, data)
        .await
        .into_http()?;
    Ok(StatusCode::OK.into_response())
}

pub async fn delete_room_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    if !validator.check(id > 0, ErrorKind::BadValue, Some(fields::ID)) {
        return Ok(validator.into_response());
    }

    state
        .services
        .rooms
        .delete_room_by_id(id)
        .await
        .into_http()?;
    Ok(StatusCode::OK.into_response())
}
