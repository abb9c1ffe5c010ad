use std::time::Duration;

use reqwest::Client;

/// Configuration for the JWKS fetcher
#[derive(Debug, Clone)]
pub struct JwksFetcherConfig {
    /// Total request timeout applied to the default client (default: 30 seconds)
    pub(crate) timeout: Duration,
    /// Optional custom HTTP client for fetching JWKS
    /// If provided, it is used as-is and `timeout` is ignored
    pub(crate) http_client: Option<Client>,
}

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

impl Default for JwksFetcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl JwksFetcherConfig {
    /// Create a configuration with the default timeout and a fresh HTTP client
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            http_client: None,
        }
    }

    /// Set the request timeout of the default HTTP client
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom HTTP client
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}
