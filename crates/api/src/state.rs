use std::sync::Arc;

use cosplay_pipeline::SuggestionAssembler;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything heavy sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// The suggestion pipeline with its oracle, marketplace and account collaborators.
    pub assembler: Arc<SuggestionAssembler>,
    /// Oracle model name, reported by the connectivity test endpoint.
    pub oracle_model: String,
}
