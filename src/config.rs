//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is required")]
    Missing { var: &'static str },
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Catalog backend origin without a trailing slash, e.g. `http://localhost:5000`.
    pub backend_url: String,
    pub proxy_timeout: Duration,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `CATALOG_BACKEND_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CATALOG_PROXY_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let timeout_secs =
            parse_or("CATALOG_PROXY_TIMEOUT_SECS", lookup("CATALOG_PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "CATALOG_PROXY_TIMEOUT_SECS", value: "0".into() });
        }

        let raw = lookup("CATALOG_BACKEND_URL").map(|v| v.trim().to_owned()).unwrap_or_default();
        if raw.is_empty() {
            return Err(ConfigError::Missing { var: "CATALOG_BACKEND_URL" });
        }
        if !(raw.starts_with("http://") || raw.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "CATALOG_BACKEND_URL", value: raw });
        }
        let backend_url = raw.trim_end_matches('/').to_owned();

        Ok(Self { port, backend_url, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
    }
}
