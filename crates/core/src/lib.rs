//! Domain types shared across the bangumi backend.
//!
//! Holds the catalog record and feed types with their wire serialization,
//! the resource/feed kind discriminators, and the domain error enum.

pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{CatalogId, CatalogRecord, Feed, FeedKind, ResourceKind};
