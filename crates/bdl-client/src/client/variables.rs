//! Paginated listing of the variables belonging to a subject.

use tracing::info;

use crate::error::BdlResult;
use crate::http::HttpBackend;
use crate::models::Variable;
use crate::parsing::parse_variables_page;
use crate::url::build_variables_url;

use super::BdlClient;

/// Pages are numbered from here.
const FIRST_PAGE: u32 = 1;

impl<B: HttpBackend> BdlClient<B> {
    /// Fetch a single page of variables for a subject.
    pub async fn fetch_variables_page(
        &self,
        subject_id: &str,
        page: u32,
    ) -> BdlResult<Vec<Variable>> {
        let url = build_variables_url(&self.config, subject_id, page);
        let body = self.backend.get_text(&url).await?;
        parse_variables_page(&body)
    }

    /// Fetch every variable of a subject, in the order the API pages them.
    ///
    /// Requests pages one after another until a page comes back empty,
    /// pausing for the configured page delay after each request (the
    /// final empty one included). The first failure aborts the listing.
    pub async fn fetch_all_variables(&self, subject_id: &str) -> BdlResult<Vec<Variable>> {
        let mut results = Vec::new();
        let mut page = FIRST_PAGE;

        loop {
            let items = self.fetch_variables_page(subject_id, page).await?;
            tokio::time::sleep(self.config.page_delay).await;

            if items.is_empty() {
                break;
            }

            info!(page, count = items.len(), "Fetched variables page");
            if let Some(ref on_page) = self.on_page {
                on_page(page, items.len());
            }
            results.extend(items);
            page += 1;
        }

        info!(subject_id, total = results.len(), "Fetched all variables");
        Ok(results)
    }
}
