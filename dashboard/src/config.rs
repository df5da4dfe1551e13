use payloads::{APIClient, ClientError};
use std::sync::Arc;
use std::time::Duration;

/// Used when `CLIMATE_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api/v1";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CLIMATE_API_URL must be an http(s) URL, got {0:?}")]
    InvalidUrl(String),
    #[error("CLIMATE_API_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base address every endpoint path is appended to.
    pub api_url: String,
    /// No timeout when unset.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            request_timeout: None,
        }
    }
}

impl Config {
    /// Read the config from the process environment.
    ///
    /// Variables from a `.env` file should already be loaded (see
    /// `dotenvy::dotenv`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_url = match var("CLIMATE_API_URL") {
            Some(url) if url.trim().is_empty() => DEFAULT_API_URL.into(),
            Some(url) => {
                let url = url.trim().to_string();
                if !(url.starts_with("http://") || url.starts_with("https://"))
                {
                    return Err(ConfigError::InvalidUrl(url));
                }
                url
            }
            None => DEFAULT_API_URL.into(),
        };

        let request_timeout = var("CLIMATE_API_TIMEOUT_SECS")
            .map(|secs| {
                secs.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| ConfigError::InvalidTimeout(secs))
            })
            .transpose()?;

        Ok(Config {
            api_url,
            request_timeout,
        })
    }

    /// Build the shared gateway that every hook is handed.
    pub fn api_client(&self) -> Result<Arc<APIClient>, ClientError> {
        let client =
            APIClient::new(self.api_url.clone(), self.request_timeout)?;
        Ok(Arc::new(client))
    }
}
