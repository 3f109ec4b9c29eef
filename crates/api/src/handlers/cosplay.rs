//! Handlers for the `/cosplay` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use cosplay_core::error::CoreError;
use cosplay_core::suggestion::{FinalSuggestion, SuggestionRequest};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Canned attributes for the connectivity test
// ---------------------------------------------------------------------------

const TEST_HEIGHT_CM: f64 = 170.0;
const TEST_WEIGHT_KG: f64 = 60.0;
const TEST_GENDER: &str = "FEMALE";
const TEST_BUDGET_VND: f64 = 1_000_000.0;

/// Response body for `POST /cosplay/test`.
#[derive(Debug, Serialize)]
pub struct ConnectionTestResult {
    pub status: &'static str,
    pub model: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/cosplay/suggestions
///
/// Runs the account path when a valid bearer token is present, the guest path
/// when there is no `Authorization` header.
pub async fn suggest(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
    body: Result<Json<SuggestionRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<FinalSuggestion>>> {
    let Json(request) =
        body.map_err(|rejection| CoreError::Validation(rejection.body_text()))?;

    let suggestion = match user {
        Some(user) => {
            state
                .assembler
                .generate_for_account(user.account_id, &request)
                .await?
        }
        None => state.assembler.generate_for_guest(&request).await?,
    };

    Ok(Json(DataResponse { data: suggestion }))
}

/// POST /api/v1/cosplay/test
///
/// Plain-text body is the character name. Runs the guest path end to end
/// with canned attributes to check oracle and marketplace connectivity.
pub async fn test_connection(
    State(state): State<AppState>,
    character_name: String,
) -> AppResult<Json<DataResponse<ConnectionTestResult>>> {
    let request = SuggestionRequest {
        character_name: character_name.trim().to_string(),
        budget: Some(TEST_BUDGET_VND),
        height: Some(TEST_HEIGHT_CM),
        weight: Some(TEST_WEIGHT_KG),
        gender: Some(TEST_GENDER.to_string()),
        notes: None,
    };

    let suggestion = state
        .assembler
        .generate_for_guest(&request)
        .await
        .map_err(AppError::from)?;

    tracing::info!(
        character = %suggestion.character_name,
        products = suggestion.products.len(),
        "Connection test succeeded"
    );

    Ok(Json(DataResponse {
        data: ConnectionTestResult {
            status: "ok",
            model: state.oracle_model.clone(),
        },
    }))
}
