//! Request and response shapes for cosplay suggestions.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::product::ConvertedProduct;

/// Difficulty assigned when the oracle answer could not be structured.
pub const FALLBACK_DIFFICULTY: &str = "MEDIUM";

/// Suitability score used when none can be read from the oracle answer.
pub const DEFAULT_SUITABILITY_SCORE: &str = "7";

/// Incoming request for a cosplay suggestion.
///
/// Physical attributes are optional here because an authenticated caller may
/// have them stored on their account profile.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SuggestionRequest {
    #[validate(
        length(min = 1, max = 200),
        custom(function = "validate_not_blank")
    )]
    pub character_name: String,
    /// Budget in the requester's local currency (VND). Non-positive means unlimited.
    pub budget: Option<f64>,
    /// Height in centimetres.
    #[validate(range(exclusive_min = 0.0))]
    pub height: Option<f64>,
    /// Weight in kilograms.
    #[validate(range(exclusive_min = 0.0))]
    pub weight: Option<f64>,
    pub gender: Option<String>,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl SuggestionRequest {
    /// The budget ceiling, if one was given and is positive.
    pub fn budget_ceiling(&self) -> Option<f64> {
        self.budget.filter(|b| *b > 0.0)
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// The eight text sections and keyword list read out of an oracle answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSuggestion {
    pub character_description: String,
    pub difficulty_level: String,
    /// `"1"` through `"10"`.
    pub suitability_score: String,
    pub budget_analysis: String,
    pub recommendations: String,
    pub items_list: String,
    pub tips: String,
    pub alternatives: String,
    /// Marketplace search keywords, at most [`crate::parser::MAX_KEYWORDS`].
    pub keywords: Vec<String>,
}

impl ParsedSuggestion {
    /// Whole-text fallback used when the answer does not follow the marker grammar.
    pub fn fallback(raw_text: &str, character_name: &str) -> Self {
        Self {
            recommendations: raw_text.to_string(),
            difficulty_level: FALLBACK_DIFFICULTY.to_string(),
            suitability_score: DEFAULT_SUITABILITY_SCORE.to_string(),
            keywords: vec![format!("{character_name} cosplay")],
            ..Default::default()
        }
    }
}

/// Pass-through metadata about the oracle call that produced a suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleMetadata {
    pub model: String,
    pub elapsed_ms: u64,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    pub finish_reason: Option<String>,
}

/// Complete suggestion returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalSuggestion {
    pub character_name: String,
    #[serde(flatten)]
    pub parsed: ParsedSuggestion,
    pub products: Vec<ConvertedProduct>,
    /// Time spent composing the prompt, calling the oracle and parsing.
    pub processing_time_ms: u64,
    pub oracle: OracleMetadata,
}
