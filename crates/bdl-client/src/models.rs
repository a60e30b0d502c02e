//! Domain and internal configuration types for the BDL client.

use std::time::Duration;
use url::Url;

use crate::config::BdlClientConfig;
use crate::error::BdlResult;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the BDL client, resolved from `BdlClientConfig`.
#[derive(Debug, Clone)]
pub struct BdlConfig {
    /// Base URL for the BDL API (default: <https://bdl.stat.gov.pl/api/v1>)
    pub base_url: Url,
    /// Records requested per page (default: 10)
    pub page_size: u32,
    /// Pause after every page request (default: 500ms)
    pub page_delay: Duration,
}

impl BdlConfig {
    /// Resolve the public configuration, validating the base URL.
    pub fn from_public(config: &BdlClientConfig) -> BdlResult<Self> {
        Ok(Self {
            base_url: Url::parse(&config.base_url)?,
            page_size: config.page_size,
            page_delay: config.page_delay,
        })
    }
}

impl Default for BdlConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(crate::config::DEFAULT_BASE_URL)
                .expect("default BDL API URL is valid"),
            page_size: 10,
            page_delay: Duration::from_millis(500),
        }
    }
}

// ============================================================================
// Variable
// ============================================================================

/// A statistical variable as listed by the `variables` endpoint.
///
/// The id is opaque; it is neither validated nor parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    /// Identifier assigned by the API
    pub id: String,
    /// Human-readable variable name
    pub name: String,
}

impl Variable {
    /// Create a new variable record.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.name)
    }
}
