//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled HTTP client for the forwarder.

use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with an HTTP client bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialized.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.proxy_timeout).build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
