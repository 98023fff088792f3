//! In-memory to-do item store.
//!
//! # Overview
//! Holds an insertion-ordered list of `{id, name}` items and exposes four
//! operations over it: `list`, `add`, `update` and `delete`. Mutations
//! validate their input and reject with a typed `StoreError` carrying a code
//! and the offending field.
//!
//! # Design
//! - `ItemRepository` is the seam the HTTP layer depends on; the store is
//!   injected, never global.
//! - `InMemoryItemStore` serializes mutations behind a single write lock.
//! - Names are unique by exact comparison; filtering is case-insensitive.

pub mod error;
pub mod store;
pub mod types;

pub use error::{ErrorCode, ErrorKind, Field, SeedError, StoreError, StoreResult};
pub use store::{InMemoryItemStore, ItemRepository};
pub use types::{Item, ItemFilter, ItemId};
