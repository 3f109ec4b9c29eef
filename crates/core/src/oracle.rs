//! Text oracle seam.
//!
//! The oracle is an external generative-text service. The pipeline hands it a
//! user prompt plus a fixed system instruction and gets back free-form prose.

use async_trait::async_trait;

use crate::suggestion::OracleMetadata;

/// A single oracle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OraclePrompt {
    pub system_instruction: String,
    pub user_prompt: String,
}

/// Token accounting reported by the oracle. Pass-through only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The oracle's answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleAnswer {
    pub text: String,
    pub model: String,
    pub elapsed_ms: u64,
    pub usage: TokenUsage,
    pub finish_reason: Option<String>,
}

impl OracleAnswer {
    /// Metadata that travels with the final suggestion.
    pub fn metadata(&self) -> OracleMetadata {
        OracleMetadata {
            model: self.model.clone(),
            elapsed_ms: self.elapsed_ms,
            prompt_tokens: self.usage.prompt_tokens,
            completion_tokens: self.usage.completion_tokens,
            total_tokens: self.usage.total_tokens,
            finish_reason: self.finish_reason.clone(),
        }
    }
}

/// Errors from an oracle call.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// The request could not be sent or the connection failed.
    #[error("Oracle request failed: {0}")]
    Request(String),

    /// The oracle replied with an error status or an error payload.
    #[error("Oracle returned an error: {0}")]
    Response(String),

    /// The reply could not be decoded.
    #[error("Oracle response could not be decoded: {0}")]
    Decode(String),

    /// The reply decoded fine but carried no text.
    #[error("Oracle returned no usable answer")]
    EmptyAnswer,
}

/// Generative text collaborator.
#[async_trait]
pub trait TextOracle: Send + Sync {
    async fn ask(&self, prompt: &OraclePrompt) -> Result<OracleAnswer, OracleError>;
}
