//! Document store clients for intake submissions

mod error;
mod firestore;
mod memory;
mod traits;

pub use error::StoreError;
pub use firestore::{FirestoreStore, DEFAULT_BASE_URL as FIRESTORE_URL};
pub use memory::MemoryStore;
pub use traits::DocumentStore;

#[cfg(test)]
pub use traits::MockDocumentStore;
