//! Closed error taxonomy shared by every upstream domain.
//!
//! Raw upstream failures are classified exactly once, where they are
//! observed, into one of five kinds. Everything downstream only ever sees
//! an [`AppError`].

use serde::Serialize;
use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The requested resource does not exist upstream.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller supplied input the upstream or the core rejects.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transient fault reported by an upstream backend.
    #[error("Upstream error: {0}")]
    UpstreamError(String),

    /// Confirmed outage of an upstream dependency.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Unclassified failure, carrying the original cause.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Payload-free discriminant of [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// See [`AppError::NotFound`].
    NotFound,
    /// See [`AppError::InvalidInput`].
    InvalidInput,
    /// See [`AppError::UpstreamError`].
    UpstreamError,
    /// See [`AppError::UpstreamUnavailable`].
    UpstreamUnavailable,
    /// See [`AppError::Unknown`].
    Unknown,
}

impl AppError {
    /// Builds an error of the given kind carrying `detail`.
    #[must_use]
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match kind {
            ErrorKind::NotFound => Self::NotFound(detail),
            ErrorKind::InvalidInput => Self::InvalidInput(detail),
            ErrorKind::UpstreamError => Self::UpstreamError(detail),
            ErrorKind::UpstreamUnavailable => Self::UpstreamUnavailable(detail),
            ErrorKind::Unknown => Self::Unknown(detail),
        }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::UpstreamError(_) => ErrorKind::UpstreamError,
            Self::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// Returns the detail text carried by this error.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::NotFound(d)
            | Self::InvalidInput(d)
            | Self::UpstreamError(d)
            | Self::UpstreamUnavailable(d)
            | Self::Unknown(d) => d,
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::InvalidInput(_) => 400,
            Self::UpstreamError(_) => 502,
            Self::UpstreamUnavailable(_) => 503,
            Self::Unknown(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::UpstreamError(_) => "UPSTREAM_ERROR",
            Self::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            Self::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Message shown to API consumers.
    ///
    /// Details stay in the logs; callers only get a fixed text per kind.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Resource not found",
            Self::InvalidInput(_) => "Bad request",
            Self::UpstreamError(_) => "Error while contacting external service",
            Self::UpstreamUnavailable(_) => "Service is unavailable",
            Self::Unknown(_) => "Unknown error",
        }
    }

    /// Builds the response body handed to the presentation layer.
    #[must_use]
    pub fn error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.error_code(),
            message: self.public_message(),
        }
    }
}

/// Serializable error body for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Machine readable error code.
    pub error: &'static str,
    /// Human readable message.
    pub message: &'static str,
}
