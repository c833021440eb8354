use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::feed::DEFAULT_FEED_URL;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("NEWSCLOUD_FEED_URL is not a valid URL: {0}")]
    InvalidFeedUrl(#[from] url::ParseError),

    #[error("NEWSCLOUD_TIMEOUT_SECS must be a positive integer, got '{0}'")]
    InvalidTimeout(String),
}

/// Settings taken from the environment. CLI flags override them.
///
/// - `NEWSCLOUD_FEED_URL`: RSS search endpoint (default: Google News)
/// - `NEWSCLOUD_FONT`: default font file for rendering
/// - `NEWSCLOUD_TIMEOUT_SECS`: feed fetch timeout (default: 30)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub feed_url: String,
    pub font_path: Option<PathBuf>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            font_path: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let feed_url = match get("NEWSCLOUD_FEED_URL") {
            Some(url) => {
                url::Url::parse(&url)?;
                url
            }
            None => DEFAULT_FEED_URL.to_string(),
        };

        let timeout = match get("NEWSCLOUD_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            feed_url,
            font_path: get("NEWSCLOUD_FONT").map(PathBuf::from),
            timeout,
        })
    }
}
