//! Gemini-backed implementation of the [`cosplay_core::oracle::TextOracle`] seam.

pub mod config;
pub mod gemini;

pub use config::GeminiConfig;
pub use gemini::GeminiOracle;
