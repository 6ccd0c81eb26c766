use std::time::Duration;

use finsight_core::errors::{Error, Result};
use log::warn;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

const API_URL_VAR: &str = "FINSIGHT_API_URL";
const TIMEOUT_VAR: &str = "FINSIGHT_REQUEST_TIMEOUT_MS";
const ACCESS_TOKEN_VAR: &str = "FINSIGHT_ACCESS_TOKEN";

/// Connection settings for the data service REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataServiceConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub access_token: Option<String>,
}

impl Default for DataServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            access_token: None,
        }
    }
}

impl DataServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Reads the configuration from the process environment, loading a
    /// `.env` file first when one exists.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(Error::ConfigIO(e.to_string()));
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(API_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::InvalidConfigValue(format!(
                "{} must be an http(s) URL, got '{}'",
                API_URL_VAR, base_url
            )));
        }

        let timeout_ms = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                warn!(
                    "Ignoring invalid {} '{}', using {}ms",
                    TIMEOUT_VAR, raw, DEFAULT_TIMEOUT_MS
                );
                DEFAULT_TIMEOUT_MS
            }),
            None => DEFAULT_TIMEOUT_MS,
        };

        let access_token = lookup(ACCESS_TOKEN_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            base_url,
            request_timeout: Duration::from_millis(timeout_ms),
            access_token,
        })
    }
}
