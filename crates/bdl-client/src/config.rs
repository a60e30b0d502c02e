//! Public configuration for the BDL client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this when the client is built.

use std::time::Duration;

/// Default base URL of the BDL REST API.
pub const DEFAULT_BASE_URL: &str = "https://bdl.stat.gov.pl/api/v1";

/// Configuration for the BDL client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use bdl_client::BdlClientConfig;
/// use std::time::Duration;
///
/// let config = BdlClientConfig::new()
///     .with_page_size(50)
///     .with_page_delay(Duration::from_secs(1))
///     .with_api_key("00000000-0000-0000-0000-000000000000");
/// ```
#[derive(Debug, Clone)]
pub struct BdlClientConfig {
    /// Base URL for the BDL API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Client key sent as `X-ClientId`
    pub(crate) api_key: Option<String>,
    /// Number of records requested per page
    pub(crate) page_size: u32,
    /// Pause after every page request
    pub(crate) page_delay: Duration,
}

impl Default for BdlClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("bdl-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            api_key: None,
            page_size: 10,
            page_delay: Duration::from_millis(500),
        }
    }
}

impl BdlClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the BDL API.
    ///
    /// Defaults to `https://bdl.stat.gov.pl/api/v1`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the client key sent with every request.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set an optional client key. Empty keys are treated as absent.
    #[must_use]
    pub fn with_optional_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.is_empty());
        self
    }

    /// Set the number of records requested per page.
    ///
    /// Defaults to 10.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the pause taken after every page request.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Number of records requested per page.
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Pause taken after every page request.
    pub const fn page_delay(&self) -> Duration {
        self.page_delay
    }
}
