#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use cosplay_api::auth::jwt::{Claims, JwtConfig};
use cosplay_api::config::ServerConfig;
use cosplay_api::router::build_app_router;
use cosplay_api::state::AppState;
use cosplay_core::attributes::{AccountLookup, ProfileAttributes};
use cosplay_core::error::CoreError;
use cosplay_core::oracle::{OracleAnswer, OracleError, OraclePrompt, TextOracle, TokenUsage};
use cosplay_core::product::{ConvertedProduct, ProductCandidate, ProductSearch};
use cosplay_core::types::DbId;
use cosplay_pipeline::SuggestionAssembler;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use tower::ServiceExt;

pub const TEST_MODEL: &str = "gemini-test";

/// An oracle answer carrying all nine markers.
pub const MARKED_ANSWER: &str = "\
[CHARACTER_DESCRIPTION]
Thần Khế Ước của Liyue.
[DIFFICULTY_LEVEL]
MEDIUM
[SUITABILITY_SCORE]
9
[BUDGET_ANALYSIS]
Ngân sách vừa đủ.
[RECOMMENDATIONS]
Áo khoác nâu dài.
[ITEMS_LIST]
Áo, tóc giả, găng tay.
[TIPS]
Kẻ mắt vàng.
[ALTERNATIVES]
Childe.
[TAOBAO_KEYWORDS]
钟离cos服
钟离假发
";

// ---------------------------------------------------------------------------
// Collaborator fakes
// ---------------------------------------------------------------------------

pub enum OracleReply {
    Text(&'static str),
    Fail,
}

pub struct FakeOracle {
    reply: OracleReply,
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<OraclePrompt>>,
}

#[async_trait]
impl TextOracle for FakeOracle {
    async fn ask(&self, prompt: &OraclePrompt) -> Result<OracleAnswer, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.clone());
        match self.reply {
            OracleReply::Text(text) => Ok(OracleAnswer {
                text: text.to_string(),
                model: TEST_MODEL.to_string(),
                elapsed_ms: 5,
                usage: TokenUsage {
                    prompt_tokens: 10,
                    completion_tokens: 20,
                    total_tokens: 30,
                },
                finish_reason: Some("STOP".to_string()),
            }),
            OracleReply::Fail => Err(OracleError::Response("HTTP 503: overloaded".to_string())),
        }
    }
}

/// Returns one product priced at 100 CNY for any keyword list.
#[derive(Default)]
pub struct FakeProducts {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ProductSearch for FakeProducts {
    async fn search_by_keywords(
        &self,
        _keywords: &[String],
        _budget_ceiling: Option<f64>,
    ) -> Vec<ConvertedProduct> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        vec![ConvertedProduct::from(ProductCandidate {
            id: Some(11),
            title: Some("钟离cos服".to_string()),
            price: Some(100.0),
            ..Default::default()
        })]
    }
}

/// Knows exactly one account.
pub struct FakeAccounts {
    pub id: DbId,
    pub profile: ProfileAttributes,
}

#[async_trait]
impl AccountLookup for FakeAccounts {
    async fn find_attributes(
        &self,
        account_id: DbId,
    ) -> Result<Option<ProfileAttributes>, CoreError> {
        Ok((account_id == self.id).then(|| self.profile.clone()))
    }
}

/// Handles to the fakes behind a test app.
pub struct TestApp {
    pub router: Router,
    pub oracle: Arc<FakeOracle>,
    pub products: Arc<FakeProducts>,
}

/// Account id known to [`FakeAccounts`].
pub const KNOWN_ACCOUNT: DbId = 7;

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: test_jwt_config(),
    }
}

/// Build the full application router over fake collaborators.
pub fn build_test_app(reply: OracleReply) -> TestApp {
    let config = test_config();

    let oracle = Arc::new(FakeOracle {
        reply,
        calls: AtomicUsize::new(0),
        prompts: Mutex::new(Vec::new()),
    });
    let products = Arc::new(FakeProducts::default());
    let accounts = Arc::new(FakeAccounts {
        id: KNOWN_ACCOUNT,
        profile: ProfileAttributes {
            height: Some(188.0),
            weight: Some(77.0),
            gender: Some("MALE".to_string()),
        },
    });

    let assembler = SuggestionAssembler::new(oracle.clone(), products.clone(), accounts);

    let state = AppState {
        config: Arc::new(config.clone()),
        assembler: Arc::new(assembler),
        oracle_model: TEST_MODEL.to_string(),
    };

    TestApp {
        router: build_app_router(state, &config),
        oracle,
        products,
    }
}

/// Sign a 15-minute access token for `account_id` the way the account
/// service does.
pub fn bearer_for(account_id: DbId) -> String {
    sign_token(account_id, chrono::Utc::now().timestamp() + 15 * 60)
}

pub fn sign_token(account_id: DbId, exp: i64) -> String {
    let claims = Claims {
        sub: account_id,
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(test_jwt_config().secret.as_bytes()),
    )
    .expect("token signing should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    authorization: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", authorization)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_text(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "text/plain")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
