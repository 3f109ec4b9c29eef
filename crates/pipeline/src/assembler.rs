//! End-to-end suggestion assembly.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use cosplay_core::attributes::{
    resolve_for_account, resolve_for_guest, AccountLookup, ResolvedAttributes,
};
use cosplay_core::error::CoreError;
use cosplay_core::oracle::TextOracle;
use cosplay_core::parser;
use cosplay_core::product::ProductSearch;
use cosplay_core::prompt;
use cosplay_core::suggestion::{FinalSuggestion, ParsedSuggestion, SuggestionRequest};
use cosplay_core::types::DbId;
use futures::FutureExt;
use validator::Validate;

use crate::error::SuggestionError;

/// Runs the suggestion pipeline against injected collaborators.
pub struct SuggestionAssembler {
    oracle: Arc<dyn TextOracle>,
    products: Arc<dyn ProductSearch>,
    accounts: Arc<dyn AccountLookup>,
}

impl SuggestionAssembler {
    pub fn new(
        oracle: Arc<dyn TextOracle>,
        products: Arc<dyn ProductSearch>,
        accounts: Arc<dyn AccountLookup>,
    ) -> Self {
        Self {
            oracle,
            products,
            accounts,
        }
    }

    /// Suggestion for an unauthenticated caller.
    ///
    /// Height, weight and gender must all be present in the request; otherwise
    /// this fails before the oracle is contacted.
    pub async fn generate_for_guest(
        &self,
        request: &SuggestionRequest,
    ) -> Result<FinalSuggestion, SuggestionError> {
        tracing::info!(character = %request.character_name, "Generating suggestion for guest");

        request.validate().map_err(CoreError::from)?;
        let attributes = resolve_for_guest(request)?;

        self.run_guarded(request, attributes).await
    }

    /// Suggestion for an account holder.
    ///
    /// Attributes stored on the account take precedence over the request,
    /// field by field.
    pub async fn generate_for_account(
        &self,
        account_id: DbId,
        request: &SuggestionRequest,
    ) -> Result<FinalSuggestion, SuggestionError> {
        tracing::info!(
            account_id,
            character = %request.character_name,
            "Generating suggestion for account"
        );

        request.validate().map_err(CoreError::from)?;
        let profile = match self.accounts.find_attributes(account_id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => return Err(SuggestionError::AccountNotFound(account_id)),
            Err(e) => {
                tracing::error!(account_id, error = %e, "Account lookup failed");
                return Err(SuggestionError::Unexpected(e.to_string()));
            }
        };
        let attributes = resolve_for_account(&profile, request);

        self.run_guarded(request, attributes).await
    }

    /// Run the pipeline, turning any panic into [`SuggestionError::Unexpected`].
    async fn run_guarded(
        &self,
        request: &SuggestionRequest,
        attributes: ResolvedAttributes,
    ) -> Result<FinalSuggestion, SuggestionError> {
        match AssertUnwindSafe(self.run(request, &attributes))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                tracing::error!(error = %message, "Suggestion pipeline panicked");
                Err(SuggestionError::Unexpected(message))
            }
        }
    }

    async fn run(
        &self,
        request: &SuggestionRequest,
        attributes: &ResolvedAttributes,
    ) -> Result<FinalSuggestion, SuggestionError> {
        let started = Instant::now();

        let oracle_prompt = prompt::compose(request, attributes);
        let answer = self.oracle.ask(&oracle_prompt).await.map_err(|e| {
            tracing::error!(error = %e, "Oracle call failed");
            SuggestionError::Oracle(e)
        })?;

        let parsed = parse_or_fallback(&answer.text, &request.character_name);
        let processing_time_ms = started.elapsed().as_millis() as u64;

        let products = if parsed.keywords.is_empty() {
            tracing::warn!(
                character = %request.character_name,
                "No search keywords in oracle answer, skipping product search"
            );
            Vec::new()
        } else {
            self.products
                .search_by_keywords(&parsed.keywords, request.budget_ceiling())
                .await
        };

        tracing::info!(
            character = %request.character_name,
            keywords = parsed.keywords.len(),
            products = products.len(),
            processing_time_ms,
            "Suggestion assembled"
        );

        Ok(FinalSuggestion {
            character_name: request.character_name.clone(),
            parsed,
            products,
            processing_time_ms,
            oracle: answer.metadata(),
        })
    }
}

/// Parse the oracle answer, substituting the whole-text fallback on any failure.
fn parse_or_fallback(text: &str, character_name: &str) -> ParsedSuggestion {
    match std::panic::catch_unwind(|| parser::parse_suggestion(text)) {
        Ok(Ok(parsed)) => parsed,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Oracle answer not structured, using fallback");
            ParsedSuggestion::fallback(text, character_name)
        }
        Err(panic) => {
            tracing::warn!(
                error = %panic_message(panic.as_ref()),
                "Parser panicked, using fallback"
            );
            ParsedSuggestion::fallback(text, character_name)
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
