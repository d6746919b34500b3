//! Error types for the todo API client.
//!
//! # Design
//! Two layers. `ApiError` is what the request/response layer and the
//! transport report: it keeps the raw status, body, or transport failure.
//! `ClientError` is what `TodoApiClient` returns: one variant per operation
//! family, each displaying a fixed user-facing message while chaining the
//! `ApiError` as its source so logs and callers that care can still reach
//! the cause.

use thiserror::Error;

/// Low-level failures from building, executing, or parsing a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; the requested resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// Connection failure, timeout, or an unreadable response body.
    #[error("transport failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// The HTTP status received from the server, if the exchange got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::HttpError { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::DeserializationError(_) | ApiError::SerializationError(_) => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport(e) if e.is_timeout())
    }
}

/// Errors returned by `TodoApiClient`.
///
/// `Display` is always the fixed message of the failed operation, whatever
/// the underlying cause was.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{message}")]
    Load {
        message: &'static str,
        #[source]
        source: ApiError,
    },

    #[error("{message}")]
    Create {
        message: &'static str,
        #[source]
        source: ApiError,
    },

    #[error("{message}")]
    Update {
        message: &'static str,
        #[source]
        source: ApiError,
    },

    #[error("{message}")]
    Delete {
        message: &'static str,
        #[source]
        source: ApiError,
    },

    #[error("{message}")]
    BulkDelete {
        message: &'static str,
        #[source]
        source: ApiError,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl ClientError {
    /// The fixed, user-facing message of this error.
    pub fn message(&self) -> &'static str {
        match self {
            ClientError::Load { message, .. }
            | ClientError::Create { message, .. }
            | ClientError::Update { message, .. }
            | ClientError::Delete { message, .. }
            | ClientError::BulkDelete { message, .. } => message,
            ClientError::Build(_) => "failed to build HTTP client",
        }
    }

    /// The underlying request failure, when there is one.
    pub fn cause(&self) -> Option<&ApiError> {
        match self {
            ClientError::Load { source, .. }
            | ClientError::Create { source, .. }
            | ClientError::Update { source, .. }
            | ClientError::Delete { source, .. }
            | ClientError::BulkDelete { source, .. } => Some(source),
            ClientError::Build(_) => None,
        }
    }

    /// HTTP status of the underlying failure, if a response was received.
    pub fn status(&self) -> Option<u16> {
        self.cause().and_then(ApiError::status)
    }
}
