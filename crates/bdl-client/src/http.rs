//! HTTP backend abstraction for the BDL API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and makes exactly one attempt per request.

use crate::config::BdlClientConfig;
use crate::error::{BdlError, BdlResult};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;
use url::Url;

/// Header carrying the registered client key (`X-ClientId`; header names are case-insensitive).
pub const CLIENT_ID_HEADER: &str = "x-clientid";

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch a response body from a URL.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch a URL and return the body as text.
    ///
    /// Any non-2xx status is an [`BdlError::ApiRequestFailed`].
    async fn get_text(&self, url: &Url) -> BdlResult<String>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// The client key and user agent are installed as default headers, so
/// every request carries them.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &BdlClientConfig) -> BdlResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(ref key) = config.api_key {
            let mut value = HeaderValue::from_str(key).map_err(|_| BdlError::InvalidConfig {
                message: format!("API key is not a valid {CLIENT_ID_HEADER} header value"),
            })?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(CLIENT_ID_HEADER), value);
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_text(&self, url: &Url) -> BdlResult<String> {
        debug!(%url, "Requesting BDL page");
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BdlError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(any(test, feature = "test-utils"))]
pub mod testing {
    use super::*;
    use crate::models::Variable;
    use std::collections::HashMap;
    use std::fmt::Write as _;
    use std::sync::{Arc, Mutex};

    /// Canned response for the fake backend.
    #[derive(Debug, Clone)]
    pub enum CannedResponse {
        /// A 200 response with this XML body.
        Xml(String),
        /// A failed response with this HTTP status.
        Status(u16),
    }

    impl CannedResponse {
        /// A 200 response listing the given variables as `item` elements.
        pub fn items(vars: &[Variable]) -> Self {
            let mut body = String::from("<variables><results>");
            for var in vars {
                let _ = write!(
                    body,
                    "<item><id>{}</id><name>{}</name></item>",
                    quick_xml::escape::escape(var.id.as_str()),
                    quick_xml::escape::escape(var.name.as_str()),
                );
            }
            body.push_str("</results></variables>");
            Self::Xml(body)
        }

        /// A 200 response with no items, which ends pagination.
        pub fn empty() -> Self {
            Self::items(&[])
        }
    }

    /// A fake HTTP backend that serves canned responses keyed by the
    /// `page` query parameter and records every requested URL.
    ///
    /// Clones share the request log, so a test can keep one handle while
    /// the client owns another.
    #[derive(Clone, Default)]
    pub struct FakeBackend {
        pages: HashMap<u32, CannedResponse>,
        default_response: Option<CannedResponse>,
        requests: Arc<Mutex<Vec<Url>>>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a canned response for a page number.
        #[must_use]
        pub fn with_page(mut self, page: u32, response: CannedResponse) -> Self {
            self.pages.insert(page, response);
            self
        }

        /// Set a default response for pages that have no canned response.
        #[must_use]
        pub fn with_default(mut self, response: CannedResponse) -> Self {
            self.default_response = Some(response);
            self
        }

        /// Every URL requested so far, in order.
        pub fn requests(&self) -> Vec<Url> {
            self.requests.lock().unwrap().clone()
        }

        /// Number of requests made so far.
        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn find_response(&self, url: &Url) -> Option<CannedResponse> {
            let page = url
                .query_pairs()
                .find(|(key, _)| key == "page")
                .and_then(|(_, value)| value.parse::<u32>().ok());
            page.and_then(|p| self.pages.get(&p).cloned())
                .or_else(|| self.default_response.clone())
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_text(&self, url: &Url) -> BdlResult<String> {
            self.requests.lock().unwrap().push(url.clone());

            match self.find_response(url) {
                Some(CannedResponse::Xml(body)) => Ok(body),
                Some(CannedResponse::Status(status)) => Err(BdlError::ApiRequestFailed {
                    status,
                    url: url.to_string(),
                }),
                None => Err(BdlError::ApiRequestFailed {
                    status: 404,
                    url: url.to_string(),
                }),
            }
        }
    }
}
