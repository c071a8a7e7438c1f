// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure categories shared by the whole service.
///
/// Each kind is bound to a stable wire tag and a transport status code. Both
/// are part of the external contract: once a kind has shipped, its tag and
/// status are never reassigned. New kinds may be added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A supplied value is present but malformed or otherwise unacceptable.
    BadValue,
    /// A referenced resource does not exist.
    NotFound,
    /// A required input is absent or blank.
    MissingField,
    /// A uniqueness constraint was violated.
    DuplicateValue,
    /// Anything unanticipated. Detail stays in the logs.
    Internal,
}

impl ErrorKind {
    /// Stable machine-readable tag, used as the key in error bodies.
    pub const fn tag(self) -> &'static str {
        match self {
            ErrorKind::BadValue => "badValue",
            ErrorKind::NotFound => "notFound",
            ErrorKind::MissingField => "missingField",
            ErrorKind::DuplicateValue => "duplicateValue",
            ErrorKind::Internal => "internalServerError",
        }
    }

    /// Transport status code the kind maps to.
    pub const fn status(self) -> u16 {
        match self {
            ErrorKind::BadValue => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::MissingField => 400,
            ErrorKind::DuplicateValue => 400,
            ErrorKind::Internal => 500,
        }
    }
}

/// A business-rule violation raised below the request boundary.
///
/// Carries a kind, the input fields implicated (possibly none), and a
/// human-readable message. The message is for logs only and is never sent to
/// the caller. The kind is final once constructed.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct DomainError {
    message: String,
    kind: ErrorKind,
    fields: Vec<&'static str>,
}

impl DomainError {
    pub fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
            fields: Vec::new(),
        }
    }

    pub fn with_field(message: impl Into<String>, kind: ErrorKind, field: &'static str) -> Self {
        Self {
            message: message.into(),
            kind,
            fields: vec![field],
        }
    }

    pub fn with_fields(
        message: impl Into<String>,
        kind: ErrorKind,
        fields: Vec<&'static str>,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            fields,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }
}
