pub mod cosplay;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /cosplay/suggestions                             generate suggestion (POST, optional auth)
/// /cosplay/test                                    connectivity test (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/cosplay", cosplay::router())
}
