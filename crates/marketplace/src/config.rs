/// Default marketplace API base URL.
const DEFAULT_BASE_URL: &str = "https://openapi.elim.asia";
/// Default platform searched through the marketplace API.
const DEFAULT_PLATFORM: &str = "taobao";
/// Default language for translated titles.
const DEFAULT_LANGUAGE: &str = "vi";
/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Marketplace API configuration.
#[derive(Debug, Clone)]
pub struct MarketplaceConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Login email for the static API account.
    pub email: String,
    /// Login password for the static API account.
    pub password: String,
    /// Platform searched (e.g. `taobao`).
    pub platform: String,
    /// Language code for translated titles.
    pub language: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl MarketplaceConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default                     |
    /// |----------------------------|----------|-----------------------------|
    /// | `MARKETPLACE_BASE_URL`     | no       | `https://openapi.elim.asia` |
    /// | `MARKETPLACE_EMAIL`        | **yes**  | --                          |
    /// | `MARKETPLACE_PASSWORD`     | **yes**  | --                          |
    /// | `MARKETPLACE_PLATFORM`     | no       | `taobao`                    |
    /// | `MARKETPLACE_LANGUAGE`     | no       | `vi`                        |
    /// | `MARKETPLACE_TIMEOUT_SECS` | no       | `30`                        |
    ///
    /// # Panics
    ///
    /// Panics if the credentials are missing or the timeout does not parse.
    pub fn from_env() -> Self {
        let base_url = std::env::var("MARKETPLACE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let email = std::env::var("MARKETPLACE_EMAIL")
            .expect("MARKETPLACE_EMAIL must be set in the environment");
        let password = std::env::var("MARKETPLACE_PASSWORD")
            .expect("MARKETPLACE_PASSWORD must be set in the environment");

        let platform =
            std::env::var("MARKETPLACE_PLATFORM").unwrap_or_else(|_| DEFAULT_PLATFORM.into());
        let language =
            std::env::var("MARKETPLACE_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.into());

        let timeout_secs: u64 = std::env::var("MARKETPLACE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("MARKETPLACE_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            email,
            password,
            platform,
            language,
            timeout_secs,
        }
    }
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            email: String::new(),
            password: String::new(),
            platform: DEFAULT_PLATFORM.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
