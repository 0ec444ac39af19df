//! In-process document store used when no Firestore credentials are configured

use super::error::StoreError;
use super::traits::DocumentStore;
use crate::state::SubmissionRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// A document written to the memory store
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub record: SubmissionRecord,
}

/// Keeps documents in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Collection name to `(id, record)` in insertion order
    collections: Mutex<HashMap<String, Vec<(String, SubmissionRecord)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents written to `collection`, oldest first
    #[cfg(test)]
    pub fn documents(&self, collection: &str) -> Vec<StoredDocument> {
        let Ok(collections) = self.collections.lock() else {
            return Vec::new();
        };
        collections
            .get(collection)
            .into_iter()
            .flatten()
            .map(|(id, record)| StoredDocument {
                id: id.clone(),
                record: record.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn add_document(
        &self,
        collection: &str,
        record: &SubmissionRecord,
    ) -> Result<String, StoreError> {
        let id = Uuid::new_v4().simple().to_string();
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| StoreError::Rejected("memory store lock poisoned".into()))?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push((id.clone(), record.clone()));
        tracing::debug!(collection, %id, "document stored in memory");
        Ok(id)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Flow;
    use chrono::Utc;

    fn record() -> SubmissionRecord {
        SubmissionRecord::from_form(&Flow::Employer.new_form(), Utc::now())
    }

    #[test]
    fn test_add_document_keeps_collections_apart() {
        let store = MemoryStore::new();
        let first = tokio_test::block_on(store.add_document("employers", &record())).unwrap();
        let second = tokio_test::block_on(store.add_document("employers", &record())).unwrap();
        tokio_test::block_on(store.add_document("nurses", &record())).unwrap();

        let employers = store.documents("employers");
        assert_eq!(employers.len(), 2);
        assert_eq!(employers[0].id, first);
        assert_eq!(employers[1].id, second);
        assert_ne!(first, second);
        assert_eq!(store.documents("nurses").len(), 1);
    }

    #[test]
    fn test_unknown_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.documents("nurses").is_empty());
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(MemoryStore::new().backend_name(), "memory");
    }
}
