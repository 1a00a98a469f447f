// Client configuration: base URL, timeouts and user agent.

use super::error::ApiError;
use once_cell::sync::Lazy;
use std::time::Duration;
use url::Url;

pub const DEFAULT_URL: &str = "http://localhost:9200";
pub const DEFAULT_TIMEOUT_SEC: u64 = 30;
pub const APP_USER_AGENT: &str = concat!("search-exists/", env!("CARGO_PKG_VERSION"));

/// Environment variable consulted by [`ClientConfig::from_env`].
pub const URL_ENV_VAR: &str = "ELASTICSEARCH_URL";

static DEFAULT_BASE_URL: Lazy<Url> =
    Lazy::new(|| normalize_base_url(DEFAULT_URL).expect("Static default URL failed to parse"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub url: Url,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.clone(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SEC),
            connect_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SEC),
            user_agent: APP_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at `url`, everything else default.
    pub fn new(url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            url: normalize_base_url(url)?,
            ..Self::default()
        })
    }

    /// Reads the base URL from `ELASTICSEARCH_URL`, falling back to
    /// `http://localhost:9200`.
    pub fn from_env() -> Result<Self, ApiError> {
        match std::env::var(URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => {
                log::debug!("Using {} from environment: {}", URL_ENV_VAR, url);
                Self::new(url.trim())
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// True when a dedicated `reqwest::Client` is needed instead of the shared one.
    pub(crate) fn needs_dedicated_client(&self) -> bool {
        self.timeout != Duration::from_secs(DEFAULT_TIMEOUT_SEC)
            || self.connect_timeout != Duration::from_secs(DEFAULT_TIMEOUT_SEC)
            || self.user_agent != APP_USER_AGENT
    }
}

/// Parses a base URL and makes sure its path ends with `/`, otherwise
/// `Url::join` would replace the last path segment.
fn normalize_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(ApiError::Config(format!("'{}' cannot be used as a base URL", raw)));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
