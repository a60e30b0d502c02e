//! Client for the BDL (Bank Danych Lokalnych) open-data API of Statistics Poland.
//!
//! Lists the statistical variables that belong to a subject, walking the
//! paginated `variables` endpoint until it runs dry.
//!
//! ```no_run
//! use bdl_client::{BdlClientConfig, DefaultBdlClient};
//!
//! # async fn demo() -> bdl_client::BdlResult<()> {
//! let client = DefaultBdlClient::new(&BdlClientConfig::new().with_page_size(50))?;
//! let variables = client.fetch_all_variables("P3183").await?;
//! println!("{} variables", variables.len());
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{BdlClient, DefaultBdlClient, PageObserver};

// Configuration
pub use config::{BdlClientConfig, DEFAULT_BASE_URL};

// Errors
pub use error::{BdlError, BdlResult};

// HTTP
pub use http::{CLIENT_ID_HEADER, HttpBackend, ReqwestBackend};

// Domain
pub use models::Variable;
pub use port::VariableSource;

// Parsing
pub use parsing::parse_variables_page;

/// In-memory test doubles for code built on this crate.
#[cfg(any(test, feature = "test-utils"))]
pub mod testing {
    pub use crate::http::testing::{CannedResponse, FakeBackend};
}

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
