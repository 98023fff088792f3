use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use todo_core::{Item, ItemFilter, ItemId};

use crate::{
    error::ApiError,
    models::{AddItemInput, HealthStatus, MutationResponse, UpdateItemInput},
    AppState,
};

pub async fn healthcheck() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}

pub async fn list_items(
    State(repo): State<AppState>,
    Query(filter): Query<ItemFilter>,
) -> Json<Vec<Item>> {
    Json(repo.list(Some(filter)).await)
}

pub async fn add_item(
    State(repo): State<AppState>,
    Json(input): Json<AddItemInput>,
) -> Result<(StatusCode, Json<MutationResponse>), ApiError> {
    let item = repo.add(input.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::new("Item added successfully", item)),
    ))
}

pub async fn update_item(
    State(repo): State<AppState>,
    Json(input): Json<UpdateItemInput>,
) -> Result<Json<MutationResponse>, ApiError> {
    let item = repo.update(input.id, input.name).await?;
    Ok(Json(MutationResponse::new("Item updated successfully", item)))
}

pub async fn delete_item(
    State(repo): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MutationResponse>, ApiError> {
    let item = repo.delete(Some(ItemId(id))).await?;
    Ok(Json(MutationResponse::new("Item deleted successfully", item)))
}
