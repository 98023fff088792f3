//! Error taxonomy for item store operations.
//!
//! # Design
//! Every rejection carries a kind (validation, conflict, not found), a
//! machine-readable code and the name of the offending input field. The
//! variants are fine-grained so callers can `match` directly; `kind()`,
//! `code()` and `field()` give the coarse view that the HTTP layer needs.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ItemId;

pub type StoreResult<T> = Result<T, StoreError>;

/// Broad category of a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    ValidationError,
    ConflictError,
    NotFoundError,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ValidationError => "VALIDATION_ERROR",
            ErrorKind::ConflictError => "CONFLICT_ERROR",
            ErrorKind::NotFoundError => "NOT_FOUND_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine-readable reason for a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NameNull,
    NameBlank,
    IdNull,
    AlreadyExists,
    ItemNotFound,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NameNull => "NAME_NULL",
            ErrorCode::NameBlank => "NAME_BLANK",
            ErrorCode::IdNull => "ID_NULL",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::ItemNotFound => "ITEM_NOT_FOUND",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Id,
    Name,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by `ItemRepository` mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("id must be provided")]
    MissingId,

    #[error("name must be provided")]
    MissingName,

    #[error("name must not be blank")]
    BlankName,

    /// Another live item already uses this exact name.
    #[error("an item named {name:?} already exists")]
    AlreadyExists { name: String },

    /// No live item has this id.
    #[error("item {id} not found")]
    NotFound { id: ItemId },
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::MissingId | StoreError::MissingName | StoreError::BlankName => {
                ErrorKind::ValidationError
            }
            StoreError::AlreadyExists { .. } => ErrorKind::ConflictError,
            StoreError::NotFound { .. } => ErrorKind::NotFoundError,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::MissingId => ErrorCode::IdNull,
            StoreError::MissingName => ErrorCode::NameNull,
            StoreError::BlankName => ErrorCode::NameBlank,
            StoreError::AlreadyExists { .. } => ErrorCode::AlreadyExists,
            StoreError::NotFound { .. } => ErrorCode::ItemNotFound,
        }
    }

    pub fn field(&self) -> Field {
        match self {
            StoreError::MissingId | StoreError::NotFound { .. } => Field::Id,
            StoreError::MissingName
            | StoreError::BlankName
            | StoreError::AlreadyExists { .. } => Field::Name,
        }
    }
}

/// Errors raised while pre-seeding a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("seed item at index {index} is invalid: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: StoreError,
    },

    #[error("seed item at index {index} has id {id}, outside 1..i64::MAX")]
    IdOutOfRange { index: usize, id: ItemId },

    #[error("seed item at index {index} reuses id {id}")]
    DuplicateId { index: usize, id: ItemId },
}
