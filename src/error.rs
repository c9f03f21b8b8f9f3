use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for api-guard operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error kind selected during response classification.
///
/// Kind names are the contract callers match on for `rescue`-style handling;
/// the selection order lives in [`crate::response::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Authentication,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    TooManyRequests,
    InternalServerError,
    Generic,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorKind::Authentication => "authentication error",
            ErrorKind::BadRequest => "bad request",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::TooManyRequests => "too many requests",
            ErrorKind::InternalServerError => "internal server error",
            ErrorKind::Generic => "API error",
        };
        f.write_str(label)
    }
}

/// One entry of the API's per-field validation error list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub message: String,
}

/// Structured payload extracted from an error response body.
///
/// Fields the raw body did not supply are `None` and are skipped entirely
/// when the payload is serialized, never emitted as null. The payload is
/// built once at classification time and owned by the raised error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    pub http_status_code: u16,
}

/// Comprehensive error type for the client core
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{kind} (http {status}): {message}",
        status = details.http_status_code,
        message = details.message.as_deref().unwrap_or("no message provided"))]
    Api { kind: ErrorKind, details: ErrorDetails },

    #[error("missing required argument{}", name_suffix(name))]
    MissingArgument { name: Option<String> },

    #[error("unrecognized parameter{}", name_suffix(name))]
    UnrecognizedParameter { name: Option<String> },

    #[error("validation failed: {message}")]
    Validation { message: String },
}

fn name_suffix(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(": {}", name),
        None => String::new(),
    }
}

impl ApiError {
    /// Create a classified API error carrying its payload
    pub fn api(kind: ErrorKind, details: ErrorDetails) -> Self {
        Self::Api { kind, details }
    }

    /// Create an error for a required argument the caller did not supply
    pub fn missing_argument<S: Into<String>>(name: Option<S>) -> Self {
        Self::MissingArgument {
            name: name.map(Into::into),
        }
    }

    /// Create an error for a parameter the endpoint does not recognize
    pub fn unrecognized_parameter<S: Into<String>>(name: Option<S>) -> Self {
        Self::UnrecognizedParameter {
            name: name.map(Into::into),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Classification kind, for errors raised by `classify`
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Structured payload, for errors raised by `classify`
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            Self::Api { details, .. } => Some(details),
            _ => None,
        }
    }
}
