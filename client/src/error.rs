//! Error types for the item API client.
//!
//! # Design
//! A response whose body carries the server's structured error becomes
//! `Rejected`, keeping the kind, code and field so callers can branch on
//! `ALREADY_EXISTS` or `ITEM_NOT_FOUND` without string-matching messages.
//! Any other unexpected status lands in `HttpError` with the raw body.

use thiserror::Error;

/// Errors returned by `ItemClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server refused the operation and said why.
    #[error("{kind} {code} on `{field}`: {message}")]
    Rejected {
        status: u16,
        kind: String,
        code: String,
        field: String,
        message: String,
    },

    /// The server returned an unexpected status without a structured error.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// The server's error code, e.g. `NAME_BLANK`, when the server sent one.
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == Some("ITEM_NOT_FOUND")
    }
}
