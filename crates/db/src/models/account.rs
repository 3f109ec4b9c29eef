//! Account profile model.

use cosplay_core::attributes::ProfileAttributes;
use cosplay_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Physical attributes stored on a row of the `accounts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AccountProfile {
    pub id: DbId,
    /// Centimetres.
    pub height: Option<f64>,
    /// Kilograms.
    pub weight: Option<f64>,
    pub gender: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<AccountProfile> for ProfileAttributes {
    fn from(profile: AccountProfile) -> Self {
        Self {
            height: profile.height,
            weight: profile.weight,
            gender: profile.gender,
        }
    }
}
