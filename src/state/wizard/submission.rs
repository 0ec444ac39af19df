//! Submission gateway: snapshots a completed flow and hands it to the document store

use super::flow::Flow;
use super::shell::Wizard;
use crate::state::forms::{FieldValue, FormState};
use crate::store::{DocumentStore, StoreError};
use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// A field value as written to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValue {
    Text(String),
    List(Vec<String>),
}

impl From<&FieldValue> for RecordValue {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Text(s) => RecordValue::Text(s.clone()),
            FieldValue::Choices(set) => RecordValue::List(set.iter().cloned().collect()),
            // Only the file name is kept; the content never leaves the machine
            FieldValue::File(file) => {
                RecordValue::Text(file.as_ref().map(|f| f.name.clone()).unwrap_or_default())
            }
        }
    }
}

/// Immutable snapshot of a form handed to the store
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    fields: Vec<(&'static str, RecordValue)>,
    created_at: DateTime<Utc>,
}

impl SubmissionRecord {
    pub fn from_form(form: &FormState, created_at: DateTime<Utc>) -> Self {
        let fields = form
            .fields()
            .iter()
            .filter_map(|field| form.value(*field).map(|v| (field.key(), RecordValue::from(v))))
            .collect();
        Self { fields, created_at }
    }

    pub fn fields(&self) -> &[(&'static str, RecordValue)] {
        &self.fields
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&RecordValue> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// `createdAt` in ISO-8601 with millisecond precision
    pub fn created_at_iso(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// A record that has passed the in-flight guard and awaits dispatch
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub flow: Flow,
    pub collection: &'static str,
    pub record: SubmissionRecord,
}

/// Result reported upward once a submission settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Submitted { id: String, message: &'static str },
    Failed { message: &'static str },
}

impl SubmissionOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Submitted { message, .. } | Self::Failed { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }
}

/// Converts validated wizard state into persisted records
#[derive(Clone)]
pub struct SubmissionGateway {
    store: Arc<dyn DocumentStore>,
}

impl SubmissionGateway {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Snapshot the wizard and raise its in-flight guard.
    /// Returns `None` when the form is not submittable or a submission is already pending.
    pub fn begin(wizard: &mut Wizard) -> Option<PendingSubmission> {
        if !wizard.can_submit() {
            return None;
        }
        wizard.set_submitting(true);
        let flow = wizard.flow();
        Some(PendingSubmission {
            flow,
            collection: flow.collection(),
            record: SubmissionRecord::from_form(wizard.form(), Utc::now()),
        })
    }

    /// Write the record on a background task so the event loop stays responsive
    pub fn dispatch(&self, pending: PendingSubmission) -> JoinHandle<Result<String, StoreError>> {
        let store = Arc::clone(&self.store);
        tracing::info!(
            flow = ?pending.flow,
            collection = pending.collection,
            backend = store.backend_name(),
            "dispatching submission"
        );
        tokio::spawn(async move {
            store
                .add_document(pending.collection, &pending.record)
                .await
        })
    }

    /// Apply a settled store result: reset on success, keep everything on failure
    pub fn settle(wizard: &mut Wizard, result: Result<String, StoreError>) -> SubmissionOutcome {
        wizard.set_submitting(false);
        let flow = wizard.flow();
        match result {
            Ok(id) => {
                tracing::info!(collection = flow.collection(), %id, "submission stored");
                wizard.reset();
                SubmissionOutcome::Submitted {
                    id,
                    message: flow.confirmation_message(),
                }
            }
            Err(e) => {
                tracing::warn!(collection = flow.collection(), error = %e, "submission failed");
                SubmissionOutcome::Failed {
                    message: flow.failure_message(),
                }
            }
        }
    }

    /// Begin, write and settle in one call
    #[cfg(test)]
    pub async fn submit(&self, wizard: &mut Wizard) -> Option<SubmissionOutcome> {
        let pending = Self::begin(wizard)?;
        let result = self
            .store
            .add_document(pending.collection, &pending.record)
            .await;
        Some(Self::settle(wizard, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FieldId;
    use crate::store::{MemoryStore, MockDocumentStore};

    fn valid_nurse_at_review() -> Wizard {
        let mut wizard = Wizard::new(Flow::Nurse);
        let form = wizard.form_mut();
        form.set_field(FieldId::FullName, FieldValue::text("Jane"));
        form.set_field(FieldId::Email, FieldValue::text("jane@x.com"));
        form.set_field(FieldId::Country, FieldValue::text("Canada"));
        form.set_field(FieldId::LicenseFile, FieldValue::file("cert.pdf"));
        while wizard.next() {}
        wizard
    }

    fn gateway(store: MockDocumentStore) -> SubmissionGateway {
        SubmissionGateway::new(Arc::new(store))
    }

    mod record {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_file_reduced_to_name() {
            let wizard = valid_nurse_at_review();
            let record = SubmissionRecord::from_form(wizard.form(), Utc::now());
            assert_eq!(
                record.get("licenseFile"),
                Some(&RecordValue::Text("cert.pdf".into()))
            );
        }

        #[test]
        fn test_choices_become_lists() {
            let mut wizard = valid_nurse_at_review();
            wizard.form_mut().set_field(
                FieldId::PreferredLocations,
                FieldValue::choices(["United Kingdom", "Australia"]),
            );
            let record = SubmissionRecord::from_form(wizard.form(), Utc::now());
            assert_eq!(
                record.get("preferredLocations"),
                Some(&RecordValue::List(vec![
                    "Australia".into(),
                    "United Kingdom".into()
                ]))
            );
        }

        #[test]
        fn test_keys_follow_flow_field_order() {
            let wizard = valid_nurse_at_review();
            let record = SubmissionRecord::from_form(wizard.form(), Utc::now());
            let keys: Vec<_> = record.fields().iter().map(|(k, _)| *k).collect();
            assert_eq!(
                keys,
                vec![
                    "fullName",
                    "email",
                    "country",
                    "licenseFile",
                    "licenseNumber",
                    "specialty",
                    "preferredLocations",
                    "availability"
                ]
            );
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_resets_and_confirms() {
            let mut store = MockDocumentStore::new();
            store
                .expect_add_document()
                .withf(|collection: &str, record: &SubmissionRecord| {
                    collection == "nurses"
                        && record.get("licenseFile") == Some(&RecordValue::Text("cert.pdf".into()))
                })
                .times(1)
                .returning(|_, _| Ok("doc-1".to_string()));

            let mut wizard = valid_nurse_at_review();
            let outcome = gateway(store).submit(&mut wizard).await.unwrap();

            assert_eq!(
                outcome,
                SubmissionOutcome::Submitted {
                    id: "doc-1".into(),
                    message: "Application submitted — we will verify and match you.",
                }
            );
            assert_eq!(wizard.form(), &Flow::Nurse.new_form());
            assert_eq!(wizard.step_number(), 1);
            assert!(!wizard.is_submitting());
        }

        #[tokio::test]
        async fn test_failure_keeps_values() {
            let mut store = MockDocumentStore::new();
            store
                .expect_add_document()
                .times(1)
                .returning(|_, _| Err(StoreError::Rejected("quota exceeded".into())));

            let mut wizard = valid_nurse_at_review();
            let before = wizard.form().clone();
            let outcome = gateway(store).submit(&mut wizard).await.unwrap();

            assert_eq!(outcome.message(), "Error submitting application.");
            assert!(!outcome.is_success());
            assert_eq!(wizard.form(), &before);
            assert!(wizard.is_review());
            assert!(wizard.can_submit());
        }

        #[tokio::test]
        async fn test_invalid_form_never_reaches_store() {
            let store = MockDocumentStore::new();
            let mut wizard = Wizard::new(Flow::Employer);
            assert!(gateway(store).submit(&mut wizard).await.is_none());
        }

        #[tokio::test]
        async fn test_dispatch_writes_to_store() {
            let store = Arc::new(MemoryStore::new());
            let gateway = SubmissionGateway::new(store.clone());
            let mut wizard = valid_nurse_at_review();

            let pending = SubmissionGateway::begin(&mut wizard).unwrap();
            let id = gateway.dispatch(pending).await.unwrap().unwrap();
            let outcome = SubmissionGateway::settle(&mut wizard, Ok(id.clone()));

            let docs = store.documents("nurses");
            assert_eq!(docs.len(), 1);
            assert_eq!(docs[0].id, id);
            assert!(outcome.is_success());
        }
    }

    mod in_flight_guard {
        use super::*;

        #[test]
        fn test_second_begin_is_refused() {
            let mut wizard = valid_nurse_at_review();
            assert!(SubmissionGateway::begin(&mut wizard).is_some());
            assert!(wizard.is_submitting());
            assert!(SubmissionGateway::begin(&mut wizard).is_none());
        }

        #[test]
        fn test_settle_lowers_guard() {
            let mut wizard = valid_nurse_at_review();
            SubmissionGateway::begin(&mut wizard).unwrap();
            SubmissionGateway::settle(&mut wizard, Err(StoreError::Rejected("offline".into())));
            assert!(!wizard.is_submitting());
            assert!(SubmissionGateway::begin(&mut wizard).is_some());
        }
    }
}
