//! Physical attribute resolution.
//!
//! A suggestion is tailored to the requester's height, weight and gender.
//! Guests must supply all three in the request. Account holders may have them
//! stored on their profile, in which case each stored value wins over the
//! request value independently.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::suggestion::SuggestionRequest;
use crate::types::DbId;

/// Physical attributes as stored on an account profile. Any field may be unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileAttributes {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Option<String>,
}

/// Attributes the prompt is built from.
///
/// Always fully populated on the guest path. On the account path a field stays
/// `None` only when neither the profile nor the request provides it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAttributes {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Option<String>,
}

/// Account lookup collaborator.
#[async_trait]
pub trait AccountLookup: Send + Sync {
    /// Return the stored physical attributes, or `None` if no such account exists.
    async fn find_attributes(&self, account_id: DbId)
        -> Result<Option<ProfileAttributes>, CoreError>;
}

/// Resolve attributes for an unauthenticated caller.
///
/// Height, weight and a non-blank gender are all mandatory.
pub fn resolve_for_guest(request: &SuggestionRequest) -> Result<ResolvedAttributes, CoreError> {
    let gender = non_blank(request.gender.as_deref());
    match (request.height, request.weight, gender) {
        (Some(height), Some(weight), Some(gender)) => Ok(ResolvedAttributes {
            height: Some(height),
            weight: Some(weight),
            gender: Some(gender),
        }),
        _ => Err(CoreError::Validation(
            "Height, weight, and gender are required for guest users".to_string(),
        )),
    }
}

/// Resolve attributes for an account holder: profile values override request values.
pub fn resolve_for_account(
    profile: &ProfileAttributes,
    request: &SuggestionRequest,
) -> ResolvedAttributes {
    ResolvedAttributes {
        height: profile.height.or(request.height),
        weight: profile.weight.or(request.weight),
        gender: non_blank(profile.gender.as_deref())
            .or_else(|| non_blank(request.gender.as_deref())),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
