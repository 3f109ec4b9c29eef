use async_trait::async_trait;
use cosplay_core::attributes::{AccountLookup, ProfileAttributes};
use cosplay_core::error::CoreError;
use cosplay_core::types::DbId;

use crate::repositories::AccountRepo;
use crate::DbPool;

/// [`AccountLookup`] backed by the `accounts` table.
#[derive(Clone)]
pub struct PgAccountLookup {
    pool: DbPool,
}

impl PgAccountLookup {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountLookup for PgAccountLookup {
    async fn find_attributes(
        &self,
        account_id: DbId,
    ) -> Result<Option<ProfileAttributes>, CoreError> {
        let profile = AccountRepo::find_profile(&self.pool, account_id)
            .await
            .map_err(|e| {
                tracing::error!(account_id, error = %e, "Failed to load account profile");
                CoreError::Internal(e.to_string())
            })?;
        Ok(profile.map(ProfileAttributes::from))
    }
}
