//! Process-wide marketplace bearer token.
//!
//! The token is fetched lazily on first use and reused by every request after
//! that. The slot is behind an async mutex, so concurrent first-time callers
//! wait for a single login instead of racing. A token whose reported lifetime
//! has run out (less a safety margin) is replaced by a fresh login. Tokens
//! without a reported lifetime are kept forever. A token rejected by the
//! marketplace is not evicted.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::api::{MarketplaceClient, MarketplaceError};

/// Tokens are refreshed this long before their reported expiry.
const EXPIRY_MARGIN: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: Option<Instant>,
}

impl CachedToken {
    fn new(token: String, expires_in_secs: Option<u64>, now: Instant) -> Self {
        let expires_at = expires_in_secs
            .map(|secs| now + Duration::from_secs(secs).saturating_sub(EXPIRY_MARGIN));
        Self { token, expires_at }
    }

    fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| now < at)
    }
}

/// Cache for the marketplace bearer token.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached token, logging in first if there is none or it expired.
    pub async fn get_or_login<C>(&self, client: &C) -> Result<String, MarketplaceError>
    where
        C: MarketplaceClient + ?Sized,
    {
        let mut slot = self.slot.lock().await;
        let now = Instant::now();

        if let Some(cached) = slot.as_ref().filter(|c| c.is_fresh(now)) {
            return Ok(cached.token.clone());
        }

        let login = client.login().await?;
        tracing::info!(expires_in = ?login.expires_in, "Obtained marketplace access token");

        let cached = CachedToken::new(login.access_token, login.expires_in, Instant::now());
        let token = cached.token.clone();
        *slot = Some(cached);
        Ok(token)
    }
}
