use anyhow::Context;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_TWITTER_API_URL: &str = "https://api.twitter.com";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// `/tweets` のクエリパラメータ
#[derive(Debug, Default)]
pub struct TweetsQuery {
    pub query: Option<String>,
}

impl TweetsQuery {
    /// A repeated `query` key takes its first non-empty value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let query = pairs
            .into_iter()
            .find(|(key, value)| key == "query" && !value.is_empty())
            .map(|(_, value)| value);

        Self { query }
    }
}

pub type SharedState = AppState;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http_client: reqwest::Client,
}

#[derive(Clone)]
pub struct AppConfig {
    pub twitter_api_url: String,
    pub bearer_token: String,
    pub port: u16,
    pub upstream_timeout: Duration,
}

// bearer_token は出力しない
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("twitter_api_url", &self.twitter_api_url)
            .field("bearer_token", &"<redacted>")
            .field("port", &self.port)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. `TWITTER_BEARER_TOKEN` is required.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bearer_token = lookup("TWITTER_BEARER_TOKEN")
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .context("TWITTER_BEARER_TOKEN environment variable is not set")?;

        let mut twitter_api_url =
            lookup("TWITTER_API_URL").unwrap_or_else(|| DEFAULT_TWITTER_API_URL.to_string());
        while twitter_api_url.ends_with('/') {
            twitter_api_url.pop();
        }

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {}", port))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .with_context(|| format!("Invalid UPSTREAM_TIMEOUT_SECS: {}", secs))?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            twitter_api_url,
            bearer_token,
            port,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
