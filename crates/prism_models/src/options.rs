//! Shared HTTP client options.

use prism_error::{HttpError, PrismResult};
use std::time::Duration;

/// Connection settings shared by the backend clients.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct HttpOptions {
    /// Scheme and host, without a trailing slash
    base_url: String,
    /// Whole-request timeout
    timeout: Duration,
}

impl HttpOptions {
    /// Options for `base_url` with the given timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Build a reqwest client honouring the timeout.
    pub(crate) fn build_client(&self) -> PrismResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)).into())
    }
}
