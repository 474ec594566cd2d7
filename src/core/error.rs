//! Failures of a single fetch cycle.

use thiserror::Error;

/// Errors raised while fetching and decoding the asset list.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The body did not match `{ items: [AssetRecord] }`.
    #[error("Malformed asset payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether running the cycle again could succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            FetchError::Request(_) | FetchError::Status { .. } => true,
            FetchError::Malformed(_) => false,
        }
    }
}
