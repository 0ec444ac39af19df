//! Document store errors

use thiserror::Error;

/// Errors raised while writing to the document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store is not configured: {0}")]
    NotConfigured(String),

    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("unexpected response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("write rejected: {0}")]
    Rejected(String),
}
