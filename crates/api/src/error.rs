use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cosplay_core::error::CoreError;
use cosplay_pipeline::SuggestionError;
use serde_json::json;

/// Prefix for pipeline failures that reach the caller.
const SUGGESTION_FAILED_PREFIX: &str = "Failed to generate cosplay suggestion: ";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`SuggestionError`] for pipeline
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the form `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cosplay_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the suggestion pipeline.
    #[error(transparent)]
    Suggestion(#[from] SuggestionError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => classify_core_error(core),

            // --- Pipeline errors ---
            AppError::Suggestion(err) => match err {
                SuggestionError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                SuggestionError::AccountNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Account with id {id} not found"),
                ),
                SuggestionError::Oracle(e) => {
                    tracing::error!(error = %e, "Oracle unavailable");
                    (
                        StatusCode::BAD_GATEWAY,
                        "ORACLE_UNAVAILABLE",
                        format!("{SUGGESTION_FAILED_PREFIX}{e}"),
                    )
                }
                SuggestionError::Unexpected(msg) => {
                    tracing::error!(error = %msg, "Suggestion pipeline failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "SUGGESTION_FAILED",
                        format!("{SUGGESTION_FAILED_PREFIX}{msg}"),
                    )
                }
            },
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(core: &CoreError) -> (StatusCode, &'static str, String) {
    match core {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
