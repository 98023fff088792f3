//! Wire DTOs for the item API.
//!
//! # Design
//! Defined independently of `todo-core` and `todo-server` so the client
//! depends only on the JSON shape. The live integration test catches drift.

use serde::{Deserialize, Serialize};

/// A to-do item as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Query for `GET /items`. A `None` name lists every item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Payload for adding an item. Omitting `name` is allowed on the wire; the
/// server rejects it with `NAME_NULL`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AddItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Payload for renaming an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UpdateItem {
    pub fn rename(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }
}

/// Body returned by every successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationResponse {
    pub message: String,
    pub item: Item,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorDetail {
    pub kind: String,
    pub code: String,
    pub field: String,
    pub message: String,
}
