//! BDL client for listing statistical variables.
//!
//! This module provides the main client interface for interacting with
//! the BDL API.

mod variables;

use std::sync::Arc;

use crate::config::BdlClientConfig;
use crate::error::BdlResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::BdlConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default BDL client using the reqwest HTTP backend.
pub type DefaultBdlClient = BdlClient<ReqwestBackend>;

/// Callback told `(page, item_count)` after each non-empty page is fetched.
pub type PageObserver = Arc<dyn Fn(u32, usize) + Send + Sync>;

// ============================================================================
// Client
// ============================================================================

/// Client for interacting with the BDL API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultBdlClient` for production code.
pub struct BdlClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: BdlConfig,
    pub(crate) on_page: Option<PageObserver>,
}

impl DefaultBdlClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be built.
    pub fn new(config: &BdlClientConfig) -> BdlResult<Self> {
        let internal_config = BdlConfig::from_public(config)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self {
            backend,
            config: internal_config,
            on_page: None,
        })
    }
}

impl<B: HttpBackend> BdlClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_backend(config: &BdlClientConfig, backend: B) -> BdlResult<Self> {
        Ok(Self {
            backend,
            config: BdlConfig::from_public(config)?,
            on_page: None,
        })
    }

    /// Report every non-empty page as it arrives, e.g. to print progress.
    #[must_use]
    pub fn with_page_observer(
        mut self,
        observer: impl Fn(u32, usize) + Send + Sync + 'static,
    ) -> Self {
        self.on_page = Some(Arc::new(observer));
        self
    }
}
