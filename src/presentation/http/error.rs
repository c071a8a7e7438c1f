// src/presentation/http/error.rs
use crate::domain::errors::{DomainError, DomainResult, ErrorKind};
use crate::presentation::http::validate::Validator;
use axum::response::{IntoResponse, Response};

/// Boundary wrapper around a failure raised below the handler.
///
/// Rendering replays the error's kind and fields through a fresh `Validator`,
/// so a failure detected deep in a service is indistinguishable on the wire
/// from one the handler caught itself. The error's message goes to the log
/// and nowhere else.
#[derive(Debug)]
pub struct HttpError(DomainError);

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let err = self.0;

        if err.kind() == ErrorKind::Internal {
            tracing::error!(error = %err, "internal error");
        } else {
            tracing::debug!(error = %err, kind = ?err.kind(), "domain error");
        }

        let mut validator = Validator::new();

        if err.fields().is_empty() {
            validator.chain(false, err.kind(), None);
        } else {
            for &field in err.fields() {
                validator.chain(false, err.kind(), Some(field));
            }
        }

        validator.into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for DomainResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from)
    }
}
