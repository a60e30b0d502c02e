//! URL construction helpers for the BDL API.
//!
//! Pure functions, so every request is built the same way.

use crate::models::BdlConfig;
use url::Url;

/// Response format requested from the API.
const RESPONSE_FORMAT: &str = "xml";

/// Build the URL for one page of the `variables` endpoint.
pub fn build_variables_url(config: &BdlConfig, subject_id: &str, page: u32) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/variables"));

    url.query_pairs_mut()
        .clear()
        .append_pair("subject-id", subject_id)
        .append_pair("format", RESPONSE_FORMAT)
        .append_pair("page-size", &config.page_size.to_string())
        .append_pair("page", &page.to_string());

    url
}
