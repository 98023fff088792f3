//! HTTP front for the to-do item store.
//!
//! # Routes
//! - `GET /items?name=<text>` lists items, optionally filtered by name.
//! - `POST /items` adds an item from `{"name": ...}`.
//! - `PUT /items` renames an item from `{"id": ..., "name": ...}`.
//! - `DELETE /items/{id}` removes an item.
//! - `GET /health` reports liveness.
//!
//! Rejections become `400`, `409` or `404` with a JSON body naming the
//! error code and the offending field.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::{future::Future, sync::Arc};

use axum::{
    http::Method,
    routing::{delete, get},
    Router,
};
use tokio::net::TcpListener;
use todo_core::ItemRepository;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{add_item, delete_item, healthcheck, list_items, update_item};

pub type AppState = Arc<dyn ItemRepository>;

pub fn app(repo: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/items", get(list_items).post(add_item).put(update_item))
        .route("/items/{id}", delete(delete_item))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(repo)
}

pub async fn run(listener: TcpListener, repo: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(repo)).await
}

/// Like `run`, but stops accepting connections once `shutdown` resolves and
/// returns after in-flight requests finish.
pub async fn run_until<F>(
    listener: TcpListener,
    repo: AppState,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(repo))
        .with_graceful_shutdown(shutdown)
        .await
}
