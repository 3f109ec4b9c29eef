//! HTTP-level integration tests for the `/cosplay` endpoints.

mod common;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use common::{
    bearer_for, body_json, build_test_app, post_json, post_json_auth, post_text, sign_token,
    OracleReply, KNOWN_ACCOUNT, MARKED_ANSWER,
};
use serde_json::json;

const SUGGESTIONS: &str = "/api/v1/cosplay/suggestions";

fn guest_body() -> serde_json::Value {
    json!({
        "character_name": "Zhongli",
        "budget": 2000000,
        "height": 175,
        "weight": 68,
        "gender": "MALE"
    })
}

// ---------------------------------------------------------------------------
// Guest path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn guest_suggestion_returns_sections_and_products() {
    let app = build_test_app(OracleReply::Text(MARKED_ANSWER));

    let response = post_json(app.router, SUGGESTIONS, guest_body()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["character_name"], "Zhongli");
    assert_eq!(data["character_description"], "Thần Khế Ước của Liyue.");
    assert_eq!(data["difficulty_level"], "MEDIUM");
    assert_eq!(data["suitability_score"], "9");
    assert_eq!(data["alternatives"], "Childe.");
    assert_eq!(data["keywords"], json!(["钟离cos服", "钟离假发"]));
    assert_eq!(data["products"][0]["id"], 11);
    assert_eq!(data["products"][0]["price"], 100.0);
    assert_eq!(data["products"][0]["price_local"], 350000.0);
    assert!(data["processing_time_ms"].is_u64());
    assert_eq!(data["oracle"]["model"], common::TEST_MODEL);
    assert_eq!(data["oracle"]["total_tokens"], 30);

    assert_eq!(app.oracle.calls.load(Ordering::SeqCst), 1);
    assert_eq!(app.products.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn guest_missing_gender_is_rejected_before_oracle_call() {
    let app = build_test_app(OracleReply::Text(MARKED_ANSWER));
    let mut body = guest_body();
    body.as_object_mut().unwrap().remove("gender");

    let response = post_json(app.router, SUGGESTIONS, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["error"],
        "Height, weight, and gender are required for guest users"
    );
    assert_eq!(app.oracle.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn blank_character_name_is_rejected() {
    let app = build_test_app(OracleReply::Text(MARKED_ANSWER));
    let mut body = guest_body();
    body["character_name"] = json!("   ");

    let response = post_json(app.router, SUGGESTIONS, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(app.oracle.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_body_is_a_validation_error() {
    let app = build_test_app(OracleReply::Text(MARKED_ANSWER));

    let response = post_json(app.router, SUGGESTIONS, json!({ "height": 170 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(app.oracle.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unmarked_oracle_answer_falls_back() {
    let app = build_test_app(OracleReply::Text("Zhongli is elegant and easy to start with."));

    let response = post_json(app.router, SUGGESTIONS, guest_body()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = &body_json(response).await["data"];
    assert_eq!(data["recommendations"], "Zhongli is elegant and easy to start with.");
    assert_eq!(data["difficulty_level"], "MEDIUM");
    assert_eq!(data["suitability_score"], "7");
    assert_eq!(data["keywords"], json!(["Zhongli cosplay"]));
}

#[tokio::test]
async fn oracle_failure_returns_bad_gateway() {
    let app = build_test_app(OracleReply::Fail);

    let response = post_json(app.router, SUGGESTIONS, guest_body()).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ORACLE_UNAVAILABLE");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to generate cosplay suggestion: "));
    assert_eq!(app.products.calls.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Account path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn account_profile_attributes_override_request() {
    let app = build_test_app(OracleReply::Text(MARKED_ANSWER));
    let token = bearer_for(KNOWN_ACCOUNT);
    let body = json!({ "character_name": "Zhongli", "height": 150 });

    let response =
        post_json_auth(app.router, SUGGESTIONS, body, &format!("Bearer {token}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let prompts = app.oracle.prompts.lock().unwrap();
    assert!(prompts[0].user_prompt.contains("188 cm"));
    assert!(prompts[0].user_prompt.contains("77 kg"));
    assert!(prompts[0].user_prompt.contains("MALE"));
}

#[tokio::test]
async fn unknown_account_returns_404() {
    let app = build_test_app(OracleReply::Text(MARKED_ANSWER));
    let token = bearer_for(999);

    let response =
        post_json_auth(app.router, SUGGESTIONS, guest_body(), &format!("Bearer {token}")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    assert_eq!(app.oracle.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn invalid_token_returns_401() {
    let app = build_test_app(OracleReply::Text(MARKED_ANSWER));

    let response =
        post_json_auth(app.router, SUGGESTIONS, guest_body(), "Bearer not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
    assert_eq!(app.oracle.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn expired_token_returns_401() {
    let app = build_test_app(OracleReply::Text(MARKED_ANSWER));
    let token = sign_token(KNOWN_ACCOUNT, chrono::Utc::now().timestamp() - 300);

    let response =
        post_json_auth(app.router, SUGGESTIONS, guest_body(), &format!("Bearer {token}")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.oracle.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_bearer_authorization_returns_401() {
    let app = build_test_app(OracleReply::Text(MARKED_ANSWER));

    let response =
        post_json_auth(app.router, SUGGESTIONS, guest_body(), "Basic dXNlcjpwYXNz").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Connectivity test endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_endpoint_runs_guest_path_with_canned_attributes() {
    let app = build_test_app(OracleReply::Text(MARKED_ANSWER));

    let response = post_text(app.router, "/api/v1/cosplay/test", "Zhongli").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["model"], common::TEST_MODEL);

    let prompts = app.oracle.prompts.lock().unwrap();
    let prompt = &prompts[0].user_prompt;
    assert!(prompt.contains("Zhongli"));
    assert!(prompt.contains("170 cm"));
    assert!(prompt.contains("60 kg"));
    assert!(prompt.contains("FEMALE"));
    assert!(prompt.contains("1.000.000 VND"));
}

#[tokio::test]
async fn test_endpoint_reports_oracle_failure() {
    let app = build_test_app(OracleReply::Fail);

    let response = post_text(app.router, "/api/v1/cosplay/test", "Zhongli").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["code"], "ORACLE_UNAVAILABLE");
}
