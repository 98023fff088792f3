//! Request and response bodies for the HTTP API.
//!
//! Input fields are `Option` so a missing field reaches the store as `None`
//! and is reported as `NAME_NULL` / `ID_NULL` instead of an extractor error.

use serde::{Deserialize, Serialize};
use todo_core::{Item, ItemId};

#[derive(Debug, Default, Deserialize)]
pub struct AddItemInput {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemInput {
    pub id: Option<ItemId>,
    pub name: Option<String>,
}

/// Body of every successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationResponse {
    pub message: String,
    pub item: Item,
}

impl MutationResponse {
    pub fn new(message: &str, item: Item) -> Self {
        Self {
            message: message.to_string(),
            item,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_input_tolerates_missing_name() {
        let input: AddItemInput = serde_json::from_str("{}").unwrap();
        assert!(input.name.is_none());
        let input: AddItemInput = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert!(input.name.is_none());
    }

    #[test]
    fn update_input_reads_integer_id() {
        let input: UpdateItemInput = serde_json::from_str(r#"{"id":3,"name":"C"}"#).unwrap();
        assert_eq!(input.id, Some(ItemId(3)));
        assert_eq!(input.name.as_deref(), Some("C"));
    }

    #[test]
    fn update_input_rejects_non_integer_id() {
        let result: Result<UpdateItemInput, _> = serde_json::from_str(r#"{"id":"three"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn mutation_response_shape() {
        let body = MutationResponse::new("Item added successfully", Item::new(1, "A"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Item added successfully");
        assert_eq!(json["item"]["id"], 1);
        assert_eq!(json["item"]["name"], "A");
    }
}
