use anyhow::{bail, Context, Result};

/// Base URL used when `STANZA_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8088";

/// Analysis service configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// None = wait for the service indefinitely
    pub request_timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_seconds: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Optional environment variables:
    /// - STANZA_BASE_URL: analysis service URL (default: http://localhost:8088)
    /// - STANZA_REQUEST_TIMEOUT: request timeout in seconds (default: none)
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("STANZA_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let request_timeout_seconds = match lookup("STANZA_REQUEST_TIMEOUT")
            .filter(|s| !s.trim().is_empty())
        {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .context("STANZA_REQUEST_TIMEOUT must be a number of seconds")?,
            ),
            None => None,
        };

        Ok(Config {
            base_url,
            request_timeout_seconds,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            bail!(
                "STANZA_BASE_URL must start with http:// or https://, got '{}'",
                self.base_url
            );
        }
        if self.request_timeout_seconds == Some(0) {
            bail!("STANZA_REQUEST_TIMEOUT must be greater than zero");
        }
        Ok(())
    }

    /// Full URL of the `/analyze` endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base_url.trim_end_matches('/'))
    }
}
