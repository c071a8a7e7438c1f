// src/presentation/http/controllers/users.rs
use crate::application::services::{RegisterUserData, UpdateUserData};
use crate::domain::errors::ErrorKind;
use crate::domain::fields;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validate::{Validator, is_non_blank, is_valid_email};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UserListParams {
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub old_password: Option<String>,
}

pub async fn get_user_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    if !validator.check(id > 0, ErrorKind::BadValue, Some(fields::ID)) {
        return Ok(validator.into_response());
    }

    let user = state.services.users.get_user_by_id(id).await.into_http()?;
    Ok((StatusCode::OK, Json(user)).into_response())
}

pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Query(params): Query<UserListParams>,
) -> HttpResult<Response> {
    let users = match params.username.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(username) => state.services.users.get_users_with_filter(username).await,
        None => state.services.users.get_all_users().await,
    }
    .into_http()?;

    Ok((StatusCode::OK, Json(users)).into_response())
}

pub async fn register_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegistrationRequest>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    let clean = validator
        .chain(
            is_non_blank(payload.email.as_deref()),
            ErrorKind::MissingField,
            Some(fields::EMAIL),
        )
        .chain(
            is_non_blank(payload.username.as_deref()),
            ErrorKind::MissingField,
            Some(fields::USERNAME),
        )
        .check(
            is_non_blank(payload.password.as_deref()),
            ErrorKind::MissingField,
            Some(fields::PASSWORD),
        )
        && validator.check(
            email_valid_or_absent(payload.email.as_deref()),
            ErrorKind::BadValue,
            Some(fields::EMAIL),
        );

    if !clean {
        return Ok(validator.into_response());
    }

    let data = RegisterUserData {
        username: payload.username.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        password: payload.password.unwrap_or_default(),
    };

    state.services.users.create_new_user(data).await.into_http()?;
    Ok(StatusCode::OK.into_response())
}

pub async fn update_user_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    let clean = validator.check(id > 0, ErrorKind::BadValue, Some(fields::ID))
        && validator
            .chain(
                email_valid_or_absent(payload.email.as_deref()),
                ErrorKind::BadValue,
                Some(fields::EMAIL),
            )
            .check(
                password_change_consistent(
                    payload.password.as_deref(),
                    payload.old_password.as_deref(),
                ),
                ErrorKind::MissingField,
                Some(fields::OLD_PASSWORD),
            );

    if !clean {
        return Ok(validator.into_response());
    }

    let data = UpdateUserData {
        email: payload.email,
        password: payload.password,
        old_password: payload.old_password,
    };

    state
        .services
        .users
        .update_user_by_id(id, data)
        .await
        .into_http()?;
    Ok(StatusCode::OK.into_response())
}

pub async fn delete_user_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    if !validator.check(id > 0, ErrorKind::BadValue, Some(fields::ID)) {
        return Ok(validator.into_response());
    }

    state
        .services
        .users
        .delete_user_by_id(id)
        .await
        .into_http()?;
    Ok(StatusCode::OK.into_response())
}

pub async fn get_playlists_for_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    if !validator.check(id > 0, ErrorKind::BadValue, Some(fields::ID)) {
        return Ok(validator.into_response());
    }

    let playlists = state
        .services
        .users
        .get_playlists_by_user_id(id)
        .await
        .into_http()?;
    Ok((StatusCode::OK, Json(playlists)).into_response())
}

/// A blank email passes here; its absence is the missing-field check's job.
fn email_valid_or_absent(email: Option<&str>) -> bool {
    match email {
        Some(value) if !value.trim().is_empty() => is_valid_email(value),
        _ => true,
    }
}

/// Changing the password requires the old one; everything else is fine.
fn password_change_consistent(password: Option<&str>, old_password: Option<&str>) -> bool {
    !is_non_blank(password) || is_non_blank(old_password)
}
