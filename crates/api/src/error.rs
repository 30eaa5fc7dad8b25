use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bangumi_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and implements [`IntoResponse`] to produce the JSON
/// error bodies the front-end consumes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bangumi_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                // Catalog misses keep the legacy wire contract: HTTP 200
                // with an `{"error": ...}` body. The deployed front-end
                // switches on the body, not the status code.
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::OK, format!("{entity} not found"))
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn core_errors_convert_via_from() {
        let err: AppError = CoreError::NotFound {
            entity: "Anime",
            id: 19,
        }
        .into();

        assert_matches!(
            err,
            AppError::Core(CoreError::NotFound {
                entity: "Anime",
                id: 19,
            })
        );
    }

    #[test]
    fn not_found_keeps_legacy_success_status() {
        let err = AppError::Core(CoreError::NotFound {
            entity: "Anime",
            id: 19,
        });

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn internal_maps_to_500() {
        let err = AppError::Core(CoreError::Internal("seed table corrupt".into()));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
