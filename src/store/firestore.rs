//! Firestore REST client
//!
//! Inserts documents with
//! `POST {base_url}/v1/projects/{project_id}/databases/(default)/documents/{collection}`.
//! Each record field becomes a Firestore `stringValue` or `arrayValue`, and the
//! creation time is written as an RFC 3339 `createdAt` string.

use super::error::StoreError;
use super::traits::DocumentStore;
use crate::state::{RecordValue, SubmissionRecord};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::time::Duration;

/// Public Firestore endpoint
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

/// Client for the Firestore documents API
#[derive(Clone)]
pub struct FirestoreStore {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl std::fmt::Debug for FirestoreStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreStore")
            .field("base_url", &self.base_url)
            .field("project_id", &self.project_id)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct CreatedDocument {
    name: String,
}

impl FirestoreStore {
    /// Create a client for `project_id`, authenticating requests with `api_key`
    pub fn new(
        base_url: &str,
        project_id: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        if project_id.is_empty() {
            return Err(StoreError::NotConfigured("missing project id".into()));
        }
        if api_key.is_empty() {
            return Err(StoreError::NotConfigured("missing API key".into()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project_id, collection
        )
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn add_document(
        &self,
        collection: &str,
        record: &SubmissionRecord,
    ) -> Result<String, StoreError> {
        let endpoint = format!("POST /documents/{collection}");
        let body = json!({ "fields": encode_fields(record) });

        let resp = self
            .http
            .post(self.documents_url(collection))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                endpoint,
                status,
                body,
            });
        }

        let created: CreatedDocument = resp.json().await.map_err(|e| StoreError::Decode {
            endpoint: endpoint.clone(),
            message: e.to_string(),
        })?;

        created
            .name
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or_else(|| StoreError::Decode {
                endpoint,
                message: format!("document name without id: {}", created.name),
            })
    }

    fn backend_name(&self) -> &'static str {
        "firestore"
    }
}

/// Encode a record as a Firestore `fields` map
fn encode_fields(record: &SubmissionRecord) -> Map<String, Value> {
    let mut fields: Map<String, Value> = record
        .fields()
        .iter()
        .map(|(key, value)| (key.to_string(), encode_value(value)))
        .collect();
    fields.insert(
        "createdAt".to_string(),
        json!({ "stringValue": record.created_at_iso() }),
    );
    fields
}

fn encode_value(value: &RecordValue) -> Value {
    match value {
        RecordValue::Text(s) => json!({ "stringValue": s }),
        RecordValue::List(items) => {
            let values: Vec<Value> = items.iter().map(|s| json!({ "stringValue": s })).collect();
            json!({ "arrayValue": { "values": values } })
        }
    }
}
