use crate::types::CatalogId;

/// Domain-level error type.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound {
        entity: &'static str,
        id: CatalogId,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
