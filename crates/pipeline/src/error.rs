use cosplay_core::error::CoreError;
use cosplay_core::oracle::OracleError;
use cosplay_core::types::DbId;

/// Errors surfaced by the suggestion pipeline.
///
/// Parse and marketplace failures never appear here; they degrade into a
/// fallback suggestion or an empty product list.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    /// Missing or malformed input. No oracle call was made.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Account {0} not found")]
    AccountNotFound(DbId),

    /// The oracle call failed or produced no usable answer.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// Anything else, including a panic inside the pipeline.
    #[error("{0}")]
    Unexpected(String),
}

impl From<CoreError> for SuggestionError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => SuggestionError::Validation(msg),
            CoreError::NotFound { id, .. } => SuggestionError::AccountNotFound(id),
            other => SuggestionError::Unexpected(other.to_string()),
        }
    }
}
