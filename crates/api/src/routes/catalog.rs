//! Catalog collection routes.
//!
//! List endpoints return the full collection as a bare JSON array in
//! authored order; the detail endpoint does a lookup by id. Paths match the
//! deployed front-end exactly, including the root-level `/{id}` detail
//! route.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use bangumi_core::{CatalogId, CatalogRecord, CoreError, ResourceKind};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/anime -- the full anime collection.
async fn list_anime(State(state): State<AppState>) -> Json<&'static [CatalogRecord]> {
    Json(state.registry.records(ResourceKind::Anime))
}

/// GET /api/comic -- the full comic collection.
async fn list_comic(State(state): State<AppState>) -> Json<&'static [CatalogRecord]> {
    Json(state.registry.records(ResourceKind::Comic))
}

/// GET /api/novel -- the full novel collection.
async fn list_novel(State(state): State<AppState>) -> Json<&'static [CatalogRecord]> {
    Json(state.registry.records(ResourceKind::Novel))
}

/// GET /{id} -- anime detail by id.
///
/// The typed `Path<CatalogId>` extractor rejects non-integer segments
/// before this handler runs. A miss propagates as
/// [`CoreError::NotFound`], which the error mapping turns into the legacy
/// `{"error": "Anime not found"}` body.
async fn anime_detail(
    State(state): State<AppState>,
    Path(id): Path<CatalogId>,
) -> AppResult<Json<CatalogRecord>> {
    let record = state
        .registry
        .by_id(ResourceKind::Anime, id)
        .ok_or(CoreError::NotFound {
            entity: ResourceKind::Anime.entity_name(),
            id,
        })?;

    Ok(Json(*record))
}

/// Catalog routes mounted at the application root.
///
/// ```text
/// GET /api/anime -> list_anime
/// GET /api/comic -> list_comic
/// GET /api/novel -> list_novel
/// GET /{id}      -> anime_detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/anime", get(list_anime))
        .route("/api/comic", get(list_comic))
        .route("/api/novel", get(list_novel))
        .route("/{id}", get(anime_detail))
}
