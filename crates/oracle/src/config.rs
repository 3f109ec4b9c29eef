/// Default Gemini model.
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
/// Default Gemini REST endpoint.
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default sampling temperature.
const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default HTTP timeout in seconds. Long answers take a while to generate.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini client configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent as the `key` query parameter.
    pub api_key: String,
    /// Model name, e.g. `gemini-2.0-flash`.
    pub model: String,
    /// Base endpoint URL without trailing slash.
    pub endpoint: String,
    /// Sampling temperature (0.0 - 2.0).
    pub temperature: f32,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var               | Required | Default                                            |
    /// |-----------------------|----------|----------------------------------------------------|
    /// | `GEMINI_API_KEY`      | **yes**  | --                                                 |
    /// | `GEMINI_MODEL`        | no       | `gemini-2.0-flash`                                 |
    /// | `GEMINI_ENDPOINT`     | no       | `https://generativelanguage.googleapis.com/v1beta` |
    /// | `GEMINI_TEMPERATURE`  | no       | `0.7`                                              |
    /// | `GEMINI_TIMEOUT_SECS` | no       | `60`                                               |
    ///
    /// # Panics
    ///
    /// Panics if `GEMINI_API_KEY` is not set or a numeric value does not parse.
    pub fn from_env() -> Self {
        let api_key =
            std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set in the environment");
        assert!(!api_key.is_empty(), "GEMINI_API_KEY must not be empty");

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let endpoint = std::env::var("GEMINI_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.into())
            .trim_end_matches('/')
            .to_string();

        let temperature: f32 = std::env::var("GEMINI_TEMPERATURE")
            .unwrap_or_else(|_| DEFAULT_TEMPERATURE.to_string())
            .parse()
            .expect("GEMINI_TEMPERATURE must be a valid f32");

        let timeout_secs: u64 = std::env::var("GEMINI_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("GEMINI_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            model,
            endpoint,
            temperature,
            timeout_secs,
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
