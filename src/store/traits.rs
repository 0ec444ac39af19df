//! Trait abstraction for the document store to enable mocking in tests

use super::error::StoreError;
use crate::state::SubmissionRecord;
use async_trait::async_trait;

/// Write-only access to named document collections
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `record` into `collection`, returning the generated document id
    async fn add_document(
        &self,
        collection: &str,
        record: &SubmissionRecord,
    ) -> Result<String, StoreError>;

    /// Short name shown in the status bar
    fn backend_name(&self) -> &'static str;
}
