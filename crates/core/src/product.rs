//! Purchasable items found for a suggestion.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::currency::cny_to_vnd;

/// A marketplace listing, priced in the marketplace's currency (CNY).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCandidate {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub title_translated: Option<String>,
    pub price: Option<f64>,
    pub seller_name: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
}

/// A listing with its price converted to the requester's currency (VND).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedProduct {
    #[serde(flatten)]
    pub candidate: ProductCandidate,
    /// `None` when the listing carried no price.
    pub price_local: Option<f64>,
}

impl From<ProductCandidate> for ConvertedProduct {
    fn from(candidate: ProductCandidate) -> Self {
        let price_local = candidate.price.map(cny_to_vnd);
        Self {
            candidate,
            price_local,
        }
    }
}

/// Product search collaborator.
///
/// Infallible by contract: every failure inside an implementation collapses
/// to an empty list.
#[async_trait]
pub trait ProductSearch: Send + Sync {
    /// Search for items matching the first keyword that yields results.
    ///
    /// `budget_ceiling` is the requester's maximum spend; `None` means unlimited.
    async fn search_by_keywords(
        &self,
        keywords: &[String],
        budget_ceiling: Option<f64>,
    ) -> Vec<ConvertedProduct>;
}
