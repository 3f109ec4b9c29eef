//! Gemini `generateContent` client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use cosplay_core::oracle::{OracleAnswer, OracleError, OraclePrompt, TextOracle, TokenUsage};
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;

/// Text oracle backed by Google's Gemini API.
pub struct GeminiOracle {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiOracle {
    /// Create a client with its own connection pool and the configured timeout.
    pub fn new(config: GeminiConfig) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OracleError::Request(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.config.api_key
        )
    }

    fn build_request(&self, prompt: &OraclePrompt) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.user_prompt.clone(),
                }],
            }],
            system_instruction: (!prompt.system_instruction.is_empty()).then(|| {
                SystemInstruction {
                    parts: vec![Part {
                        text: prompt.system_instruction.clone(),
                    }],
                }
            }),
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[async_trait]
impl TextOracle for GeminiOracle {
    async fn ask(&self, prompt: &OraclePrompt) -> Result<OracleAnswer, OracleError> {
        let started = Instant::now();
        let body = self.build_request(prompt);

        tracing::debug!(model = %self.config.model, "Calling Gemini");

        let response = self
            .client
            .post(self.build_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| OracleError::Request(e.without_url().to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| OracleError::Request(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(OracleError::Response(format!("HTTP {status}: {text}")));
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&text).map_err(|e| OracleError::Decode(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(OracleError::Response(error.message));
        }

        let candidate = parsed
            .candidates
            .and_then(|c| c.into_iter().next())
            .ok_or(OracleError::EmptyAnswer)?;

        let answer_text: String = candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if answer_text.trim().is_empty() {
            return Err(OracleError::EmptyAnswer);
        }

        let usage = parsed.usage_metadata.unwrap_or_default();
        let elapsed_ms = started.elapsed().as_millis() as u64;

        tracing::info!(
            model = %self.config.model,
            elapsed_ms,
            total_tokens = usage.total_token_count,
            "Gemini answered"
        );

        Ok(OracleAnswer {
            text: answer_text,
            model: parsed
                .model_version
                .unwrap_or_else(|| self.config.model.clone()),
            elapsed_ms,
            usage: TokenUsage {
                prompt_tokens: usage.prompt_token_count,
                completion_tokens: usage.candidates_token_count,
                total_tokens: usage.total_token_count,
            },
            finish_reason: candidate.finish_reason,
        })
    }
}
