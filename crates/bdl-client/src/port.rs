//! The seam between the export pipeline and the BDL client.
//!
//! Callers depend on `VariableSource` rather than on `BdlClient<B>`, so the
//! pipeline can run against any source of variables.

use async_trait::async_trait;

use crate::client::BdlClient;
use crate::error::BdlResult;
use crate::http::HttpBackend;
use crate::models::Variable;

/// Anything that can list every variable of a subject.
#[async_trait]
pub trait VariableSource: Send + Sync {
    /// List all variables of `subject_id`, in source order.
    async fn fetch_all(&self, subject_id: &str) -> BdlResult<Vec<Variable>>;
}

#[async_trait]
impl<B: HttpBackend> VariableSource for BdlClient<B> {
    async fn fetch_all(&self, subject_id: &str) -> BdlResult<Vec<Variable>> {
        self.fetch_all_variables(subject_id).await
    }
}
