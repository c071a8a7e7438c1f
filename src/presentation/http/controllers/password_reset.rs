// src/presentation/http/controllers/password_reset.rs
use crate::application::services::ResetPasswordData;
use crate::domain::errors::ErrorKind;
use crate::domain::fields;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validate::{Validator, is_non_blank, is_valid_email};
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyTokenParams {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

pub async fn forgot_password(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();
    let email = payload.email.as_deref().unwrap_or_default();

    if validator.check(
        is_non_blank(payload.email.as_deref()),
        ErrorKind::MissingField,
        Some(fields::EMAIL),
    ) && validator.check(
        is_valid_email(email),
        ErrorKind::BadValue,
        Some(fields::EMAIL),
    ) {
        state
            .services
            .password_resets
            .forgot_password(email)
            .await
            .into_http()?;
    }

    Ok(validator.into_response())
}

pub async fn verify_token(
    Extension(state): Extension<HttpState>,
    Query(params): Query<VerifyTokenParams>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    let clean = validator
        .chain(params.user_id > 0, ErrorKind::BadValue, Some(fields::ID))
        .check(
            is_non_blank(params.token.as_deref()),
            ErrorKind::BadValue,
            Some(fields::TOKEN),
        );

    if !clean {
        return Ok(validator.into_response());
    }

    let verified = state
        .services
        .password_resets
        .verify_token(params.user_id, params.token.as_deref().unwrap_or_default())
        .await
        .into_http()?;
    Ok((StatusCode::OK, Json(verified)).into_response())
}

pub async fn reset_password(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> HttpResult<Response> {
    let mut validator = Validator::new();

    let clean = validator
        .chain(payload.user_id > 0, ErrorKind::BadValue, Some(fields::ID))
        .chain(
            is_non_blank(payload.token.as_deref()),
            ErrorKind::MissingField,
            Some(fields::TOKEN),
        )
        .check(
            is_non_blank(payload.password.as_deref()),
            ErrorKind::MissingField,
            Some(fields::PASSWORD),
        );

    if clean {
        let data = ResetPasswordData {
            user_id: payload.user_id,
            token: payload.token.unwrap_or_default(),
            password: payload.password.unwrap_or_default(),
        };

        state
            .services
            .password_resets
            .reset_password(data)
            .await
            .into_http()?;
    }

    Ok(validator.into_response())
}
