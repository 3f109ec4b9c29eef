//! Marketplace (Taobao proxy) product search.
//!
//! [`api::MarketplaceApi`] talks HTTP to the marketplace. [`token::TokenCache`]
//! caches the bearer token until it expires.
//! [`cascade::ProductSearchCascade`] tries keyword candidates in order and
//! stops at the first one that yields listings.

pub mod api;
pub mod cascade;
pub mod config;
pub mod messages;
pub mod token;

pub use api::{MarketplaceApi, MarketplaceClient, MarketplaceError};
pub use cascade::ProductSearchCascade;
pub use config::MarketplaceConfig;
