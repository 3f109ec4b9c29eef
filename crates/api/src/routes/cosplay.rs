//! Route definitions for the `/cosplay` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::cosplay;
use crate::state::AppState;

/// Routes mounted at `/cosplay`.
///
/// ```text
/// POST /suggestions  -> suggest
/// POST /test         -> test_connection
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/suggestions", post(cosplay::suggest))
        .route("/test", post(cosplay::test_connection))
}
