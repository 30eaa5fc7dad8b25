use std::sync::Arc;

use bangumi_catalog::Registry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Nothing in here
/// is ever mutated after startup, so requests share it without coordination.
#[derive(Clone)]
pub struct AppState {
    /// Immutable catalog registry.
    pub registry: Arc<Registry>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
