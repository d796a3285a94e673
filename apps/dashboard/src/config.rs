use std::env;
use std::time::Duration;

pub const DEFAULT_TOKEN_ID: &str = "giza";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_HISTORY_DAYS: u32 = 30;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration, read from the environment with documented defaults:
///
/// - `COINGECKO_API_BASE_URL`: API base, default is the public v3 endpoint
/// - `COINGECKO_API_KEY`: optional demo API key
/// - `GIZA_TOKEN_ID`: CoinGecko id of the token, default `giza`
/// - `GIZA_CACHE_TTL_SECS`: cache TTL, default 300
/// - `GIZA_HISTORY_DAYS`: history window, default 30
/// - `GIZA_HTTP_TIMEOUT_SECS`: request timeout, default 10
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
    pub token_id: String,
    pub cache_ttl: Duration,
    pub history_days: u32,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("COINGECKO_API_BASE_URL")
                .unwrap_or_else(|_| giza_coingecko::BASE_URL.to_string()),
            api_key: env::var("COINGECKO_API_KEY").ok().filter(|k| !k.is_empty()),
            token_id: env::var("GIZA_TOKEN_ID").unwrap_or_else(|_| DEFAULT_TOKEN_ID.to_string()),
            cache_ttl: Duration::from_secs(env_u64("GIZA_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)),
            history_days: env_u64("GIZA_HISTORY_DAYS", u64::from(DEFAULT_HISTORY_DAYS)) as u32,
            http_timeout: Duration::from_secs(env_u64(
                "GIZA_HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: giza_coingecko::BASE_URL.to_string(),
            api_key: None,
            token_id: DEFAULT_TOKEN_ID.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            history_days: DEFAULT_HISTORY_DAYS,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
