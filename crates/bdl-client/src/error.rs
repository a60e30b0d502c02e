//! Error types for BDL API operations.

use thiserror::Error;

/// Result type alias for BDL API operations.
pub type BdlResult<T> = Result<T, BdlError>;

/// Errors related to BDL API operations.
#[derive(Debug, Error)]
pub enum BdlError {
    /// API request failed with an HTTP error status.
    #[error("BDL API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned a response that is not a complete XML document.
    #[error("Invalid response from BDL API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Client configuration could not be applied.
    #[error("Invalid client configuration: {message}")]
    InvalidConfig {
        /// Description of the rejected setting
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] quick_xml::Error),
}
