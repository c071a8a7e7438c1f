// src/presentation/http/validate.rs
use crate::domain::errors::ErrorKind;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Pragmatic address shape: one "@", no whitespace, a dot in the domain.
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap()
});

/// Per-request accumulator of validation failures.
///
/// One instance is created at the start of each request, fed by a sequence of
/// `check`/`chain` calls, rendered into the response exactly once, and then
/// discarded. Instances are never shared between requests; a shared
/// accumulator would bleed error state across callers.
///
/// Recording never fails and never panics; all signalling happens through the
/// accumulated state and the boolean returned by `check`.
#[derive(Debug, Default)]
pub struct Validator {
    /// Tag → implicated fields, in first-recorded order. Fields keep their
    /// insertion order and may repeat.
    errors: Vec<(&'static str, Vec<&'static str>)>,
    status: Option<StatusCode>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a predicate result and terminate the chain.
    ///
    /// Records a failure when `passed` is false. Returns true only while the
    /// accumulator is entirely clean, so the caller can branch directly on
    /// whether it is safe to proceed.
    pub fn check(&mut self, passed: bool, kind: ErrorKind, field: Option<&'static str>) -> bool {
        if !passed {
            self.record(kind, field);
        }

        self.errors.is_empty()
    }

    /// Evaluate a predicate result and keep the chain going.
    ///
    /// Records a failure when `passed` is false and hands the accumulator
    /// back so further validations can compose left-to-right before a final
    /// `check`.
    pub fn chain(
        &mut self,
        passed: bool,
        kind: ErrorKind,
        field: Option<&'static str>,
    ) -> &mut Self {
        if !passed {
            self.record(kind, field);
        }

        self
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Append the failure under the kind's tag and move the response status
    /// to the kind's status. The most recently recorded failure decides the
    /// final status, whatever was recorded before it.
    fn record(&mut self, kind: ErrorKind, field: Option<&'static str>) {
        let idx = match self.errors.iter().position(|(tag, _)| *tag == kind.tag()) {
            Some(idx) => idx,
            None => {
                self.errors.push((kind.tag(), Vec::new()));
                self.errors.len() - 1
            }
        };

        if let Some(field) = field {
            self.errors[idx].1.push(field);
        }

        self.status =
            Some(StatusCode::from_u16(kind.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR));
    }
}

impl IntoResponse for Validator {
    fn into_response(self) -> Response {
        match self.status {
            None => StatusCode::OK.into_response(),
            Some(status) => (status, Json(ErrorBody { errors: self.errors })).into_response(),
        }
    }
}

/// Wire shape of a failed validation: `{"errors": {tag: [field, ...], ...}}`.
/// Serialized by hand so tags render in the order they were first recorded.
struct ErrorBody {
    errors: Vec<(&'static str, Vec<&'static str>)>,
}

impl Serialize for ErrorBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut outer = serializer.serialize_map(Some(1))?;
        outer.serialize_entry("errors", &TagMap(&self.errors))?;
        outer.end()
    }
}

struct TagMap<'a>(&'a [(&'static str, Vec<&'static str>)]);

impl Serialize for TagMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (tag, fields) in self.0 {
            map.serialize_entry(tag, fields)?;
        }
        map.end()
    }
}

/// True when the value is present and not all whitespace.
pub fn is_non_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
