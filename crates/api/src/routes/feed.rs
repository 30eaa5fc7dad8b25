//! Home-page update feed routes.
//!
//! Each feed serializes as the two-element array `[urlList, nameList]`.
//! The channel is bound per route rather than parsed from the path, so the
//! numbered `update0`..`update3` paths the front-end requests stay stable.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use bangumi_core::{Feed, FeedKind};

use crate::state::AppState;

/// GET /api/update0 -- site download updates.
async fn downloads_feed(State(state): State<AppState>) -> Json<Feed> {
    Json(state.registry.feed(FeedKind::Downloads))
}

/// GET /api/update1 -- anime updates.
async fn anime_feed(State(state): State<AppState>) -> Json<Feed> {
    Json(state.registry.feed(FeedKind::Anime))
}

/// GET /api/update2 -- comic updates.
async fn comic_feed(State(state): State<AppState>) -> Json<Feed> {
    Json(state.registry.feed(FeedKind::Comic))
}

/// GET /api/update3 -- novel updates.
async fn novel_feed(State(state): State<AppState>) -> Json<Feed> {
    Json(state.registry.feed(FeedKind::Novel))
}

/// Feed routes mounted at the application root.
///
/// ```text
/// GET /api/update0 -> downloads_feed
/// GET /api/update1 -> anime_feed
/// GET /api/update2 -> comic_feed
/// GET /api/update3 -> novel_feed
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/update0", get(downloads_feed))
        .route("/api/update1", get(anime_feed))
        .route("/api/update2", get(comic_feed))
        .route("/api/update3", get(novel_feed))
}
