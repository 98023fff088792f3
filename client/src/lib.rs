//! Synchronous API client core for the to-do item service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip.
//!
//! # Design
//! - `ItemClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`.
//! - Server rejections keep their error code and field in
//!   `ApiError::Rejected`.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::ItemClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{AddItem, Item, ItemFilter, MutationResponse, UpdateItem};
