//! Repository for the `accounts` table.

use cosplay_core::types::DbId;
use sqlx::PgPool;

use crate::models::account::AccountProfile;

const COLUMNS: &str = "id, height, weight, gender, created_at, updated_at";

/// Reads account physical attributes.
pub struct AccountRepo;

impl AccountRepo {
    /// Find an account's profile by id.
    pub async fn find_profile(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AccountProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = $1");
        sqlx::query_as::<_, AccountProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
