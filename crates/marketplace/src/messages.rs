//! Wire types for the marketplace REST API.

use cosplay_core::product::ProductCandidate;
use serde::{Deserialize, Serialize};

/// Sort order: cheapest first.
pub const SORT_PRICE_ASC: &str = "PRICE_ASC";

/// Maximum listings requested per search.
pub const MAX_PAGE_SIZE: u32 = 20;

/// `POST /v1/auth/login` body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /v1/auth/login` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Token lifetime in seconds, when the server reports one.
    pub expires_in: Option<u64>,
    pub user: Option<serde_json::Value>,
}

/// `POST /v1/products/search` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub q: String,
    pub platform: String,
    pub lang: String,
    pub sort: String,
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFilter {
    pub price_range: PriceRange,
    pub allow_return: bool,
    pub allow_dropship: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl SearchRequest {
    /// First page of up to [`MAX_PAGE_SIZE`] listings for `keyword`, cheapest
    /// first, restricted to `[0, ceiling]` when a ceiling is given.
    pub fn for_keyword(keyword: &str, platform: &str, lang: &str, ceiling: Option<f64>) -> Self {
        Self {
            q: keyword.to_string(),
            platform: platform.to_string(),
            lang: lang.to_string(),
            sort: SORT_PRICE_ASC.to_string(),
            page: 1,
            size: MAX_PAGE_SIZE,
            filter: ceiling.map(|max| SearchFilter {
                price_range: PriceRange { min: 0.0, max },
                allow_return: true,
                allow_dropship: true,
            }),
        }
    }
}

/// `POST /v1/products/search` response.
///
/// Only the listings are decoded. The envelope (`success`, `code`, `message`,
/// `paginate`) and per-listing statistics are skipped, whatever their types.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    pub items: Option<Vec<Listing>>,
}

/// A single listing as returned by the marketplace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    pub id: Option<i64>,
    pub title: Option<String>,
    #[serde(rename = "titleEn")]
    pub title_en: Option<String>,
    pub price: Option<f64>,
    pub seller_name: Option<String>,
    pub img_url: Option<String>,
    pub link: Option<String>,
}

impl From<Listing> for ProductCandidate {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            title_translated: listing.title_en,
            price: listing.price,
            seller_name: listing.seller_name,
            image_url: listing.img_url,
            link: listing.link,
        }
    }
}
