use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_core::{ErrorCode, ErrorKind, Field, StoreError};

/// A store rejection on its way out as an HTTP response.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub StoreError);

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub kind: ErrorKind,
    pub code: ErrorCode,
    pub field: Field,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::ValidationError => StatusCode::BAD_REQUEST,
            ErrorKind::ConflictError => StatusCode::CONFLICT,
            ErrorKind::NotFoundError => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: ErrorDetail {
                kind: self.0.kind(),
                code: self.0.code(),
                field: self.0.field(),
                message: self.0.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use todo_core::ItemId;

    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(ApiError(StoreError::BlankName).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError(StoreError::MissingId).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError(StoreError::AlreadyExists { name: "A".into() }).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError(StoreError::NotFound { id: ItemId(1) }).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn error_body_carries_code_and_field() {
        let body = ErrorBody {
            error: ErrorDetail {
                kind: ErrorKind::ValidationError,
                code: ErrorCode::NameBlank,
                field: Field::Name,
                message: StoreError::BlankName.to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["kind"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["code"], "NAME_BLANK");
        assert_eq!(json["error"]["field"], "name");
        assert_eq!(json["error"]["message"], "name must not be blank");
    }
}
