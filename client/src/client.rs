//! Stateless HTTP request builder and response parser for the item API.
//!
//! # Design
//! `ItemClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. A UI refreshing after a mutation simply
//! runs `build_list_items` / `parse_list_items` again.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AddItem, ErrorBody, Item, ItemFilter, MutationResponse, UpdateItem};

/// Synchronous, stateless client for the item API.
#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: String,
}

impl ItemClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_items(&self, filter: &ItemFilter) -> Result<HttpRequest, ApiError> {
        let query = serde_urlencoded::to_string(filter)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let path = if query.is_empty() {
            format!("{}/items", self.base_url)
        } else {
            format!("{}/items?{query}", self.base_url)
        };
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_add_item(&self, input: &AddItem) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, input)
    }

    pub fn build_update_item(&self, input: &UpdateItem) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, input)
    }

    pub fn build_delete_item(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/items/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_add_item(&self, response: HttpResponse) -> Result<MutationResponse, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<MutationResponse, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<MutationResponse, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    fn json_request<T: serde::Serialize>(
        &self,
        method: HttpMethod,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}/items", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map an unexpected status to `Rejected` when the body is a structured
/// error, `HttpError` otherwise.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(ErrorBody { error }) => Err(ApiError::Rejected {
            status: response.status,
            kind: error.kind,
            code: error.code,
            field: error.field,
            message: error.message,
        }),
        Err(_) => Err(ApiError::HttpError {
            status: response.status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ItemClient {
        ItemClient::new("http://localhost:4000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_items_without_filter() {
        let req = client().build_list_items(&ItemFilter::default()).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:4000/items");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_list_items_encodes_filter() {
        let filter = ItemFilter {
            name: Some("buy milk&eggs".to_string()),
        };
        let req = client().build_list_items(&filter).unwrap();
        assert_eq!(
            req.path,
            "http://localhost:4000/items?name=buy+milk%26eggs"
        );
    }

    #[test]
    fn build_add_item_produces_json_post() {
        let req = client().build_add_item(&AddItem::named("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:4000/items");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Buy milk"}));
    }

    #[test]
    fn build_update_item_omits_absent_fields() {
        let input = UpdateItem {
            id: Some(3),
            name: None,
        };
        let req = client().build_update_item(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"id": 3}));
    }

    #[test]
    fn build_delete_item_puts_id_in_path() {
        let req = client().build_delete_item(42);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:4000/items/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_items_success() {
        let items = client()
            .parse_list_items(response(200, r#"[{"id":1,"name":"Buy milk"}]"#))
            .unwrap();
        assert_eq!(
            items,
            vec![Item {
                id: 1,
                name: "Buy milk".to_string()
            }]
        );
    }

    #[test]
    fn parse_add_item_rejected_with_code() {
        let body = r#"{"error":{"kind":"CONFLICT_ERROR","code":"ALREADY_EXISTS","field":"name","message":"an item named \"A\" already exists"}}"#;
        let err = client().parse_add_item(response(409, body)).unwrap_err();
        assert_eq!(err.code(), Some("ALREADY_EXISTS"));
        assert!(matches!(
            err,
            ApiError::Rejected { status: 409, ref field, .. } if field == "name"
        ));
    }

    #[test]
    fn parse_delete_item_not_found() {
        let body = r#"{"error":{"kind":"NOT_FOUND_ERROR","code":"ITEM_NOT_FOUND","field":"id","message":"item 9 not found"}}"#;
        let err = client().parse_delete_item(response(404, body)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn parse_unstructured_error_is_http_error() {
        let err = client()
            .parse_update_item(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn parse_list_items_bad_json() {
        let err = client().parse_list_items(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ItemClient::new("http://localhost:4000/");
        assert_eq!(client.build_delete_item(1).path, "http://localhost:4000/items/1");
    }
}
