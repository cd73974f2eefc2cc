//! Error types for the Sleeper client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sleeper API returned {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed {endpoint} response: {source}")]
    Malformed {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl SleeperError {
    /// True when the upstream answered but the payload had an unexpected shape
    pub fn is_malformed(&self) -> bool {
        matches!(self, SleeperError::Malformed { .. })
    }
}
