//! Short-circuiting keyword cascade over the marketplace search endpoint.
//!
//! Keywords are tried strictly in order. Each keyword's listings are
//! budget-filtered first; the first keyword with listings left after the
//! filter wins and no later keyword is queried. A keyword left with nothing,
//! or whose request fails, moves on to the next one. Nothing is ever raised to
//! the caller; every failure ends in an empty list.

use async_trait::async_trait;
use cosplay_core::product::{ConvertedProduct, ProductCandidate, ProductSearch};

use crate::api::{MarketplaceApi, MarketplaceClient};
use crate::messages::{Listing, SearchRequest};
use crate::token::TokenCache;

/// Keyword cascade owning the marketplace client and its token cache.
pub struct ProductSearchCascade<C> {
    client: C,
    tokens: TokenCache,
    platform: String,
    language: String,
}

impl ProductSearchCascade<MarketplaceApi> {
    /// Build a cascade over the HTTP client, searching its configured platform.
    pub fn from_api(api: MarketplaceApi) -> Self {
        let platform = api.config().platform.clone();
        let language = api.config().language.clone();
        Self::new(api, platform, language)
    }
}

impl<C: MarketplaceClient> ProductSearchCascade<C> {
    pub fn new(client: C, platform: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            client,
            tokens: TokenCache::new(),
            platform: platform.into(),
            language: language.into(),
        }
    }

    /// Search `keywords` in order and return the first result set that is
    /// non-empty after budget filtering.
    ///
    /// A positive `budget_ceiling` is sent as a server-side price filter and
    /// re-applied to the returned listings.
    pub async fn search_by_keywords(
        &self,
        keywords: &[String],
        budget_ceiling: Option<f64>,
    ) -> Vec<ConvertedProduct> {
        if keywords.is_empty() {
            tracing::warn!("No keywords provided for marketplace search");
            return Vec::new();
        }
        let ceiling = budget_ceiling.filter(|c| *c > 0.0);

        let token = match self.tokens.get_or_login(&self.client).await {
            Ok(token) => token,
            Err(e) => {
                tracing::error!(error = %e, "Failed to obtain marketplace access token");
                return Vec::new();
            }
        };

        for (index, keyword) in keywords.iter().enumerate() {
            tracing::info!(keyword = %keyword, attempt = index + 1, "Searching marketplace");

            let request =
                SearchRequest::for_keyword(keyword, &self.platform, &self.language, ceiling);
            let listings = match self.client.search(&token, &request).await {
                Ok(response) => response.items.unwrap_or_default(),
                Err(e) => {
                    tracing::warn!(keyword = %keyword, error = %e, "Marketplace search failed");
                    continue;
                }
            };

            let found = listings.len();
            let products = within_ceiling(listings, ceiling);
            if products.is_empty() {
                tracing::warn!(keyword = %keyword, found, "No products within budget for keyword");
                continue;
            }

            tracing::info!(
                keyword = %keyword,
                found,
                kept = products.len(),
                "Marketplace search succeeded"
            );
            return products;
        }

        tracing::warn!(
            keywords = keywords.len(),
            "No products found with any of the provided keywords"
        );
        Vec::new()
    }
}

/// Drop listings priced above the ceiling, then convert the rest.
///
/// The comparison uses the listing's marketplace price before conversion, the
/// same figure the server-side filter was given.
fn within_ceiling(listings: Vec<Listing>, ceiling: Option<f64>) -> Vec<ConvertedProduct> {
    listings
        .into_iter()
        .filter(|l| match ceiling {
            Some(max) => l.price.is_some_and(|p| p <= max),
            None => true,
        })
        .map(ProductCandidate::from)
        .map(ConvertedProduct::from)
        .collect()
}

#[async_trait]
impl<C: MarketplaceClient> ProductSearch for ProductSearchCascade<C> {
    async fn search_by_keywords(
        &self,
        keywords: &[String],
        budget_ceiling: Option<f64>,
    ) -> Vec<ConvertedProduct> {
        ProductSearchCascade::search_by_keywords(self, keywords, budget_ceiling).await
    }
}
