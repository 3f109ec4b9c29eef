//! Suggestion pipeline orchestration.
//!
//! [`SuggestionAssembler`] resolves physical attributes, composes the oracle
//! prompt, asks the oracle, parses the answer and, when keywords came back,
//! runs the marketplace cascade. Collaborators are injected as trait objects
//! from `cosplay_core`.

pub mod assembler;
pub mod error;

pub use assembler::SuggestionAssembler;
pub use error::SuggestionError;
