//! Error types for the league data core

use serde::Serialize;
use sleeper_client::SleeperError;
use std::fmt;
use thiserror::Error;

/// Failures while fetching or parsing the spreadsheet export
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Spreadsheet export returned {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("Workbook parse task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl SheetError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, SheetError::Workbook(_))
    }
}

/// Alias map entries that would break idempotent resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    #[error("Alias for {name} maps to {nickname}, which is itself aliased")]
    Chained { name: String, nickname: String },

    #[error("Duplicate alias for {name}")]
    Duplicate { name: String },
}

/// Why an upstream source could not be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    /// Network failure or non-success status
    UpstreamUnavailable,

    /// Upstream answered with an unexpected shape
    Malformed,
}

/// Cloneable summary of a failed fetch, kept for logging and rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReason {
    pub source: &'static str,
    pub kind: FailureKind,
    pub message: String,
}

impl FailureReason {
    pub fn from_sleeper(source: &'static str, error: &SleeperError) -> Self {
        let kind = if error.is_malformed() {
            FailureKind::Malformed
        } else {
            FailureKind::UpstreamUnavailable
        };
        Self { source, kind, message: error.to_string() }
    }

    pub fn from_sheet(source: &'static str, error: &SheetError) -> Self {
        let kind = if error.is_malformed() {
            FailureKind::Malformed
        } else {
            FailureKind::UpstreamUnavailable
        };
        Self { source, kind, message: error.to_string() }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            FailureKind::UpstreamUnavailable => "unavailable",
            FailureKind::Malformed => "malformed",
        };
        write!(f, "{} {}: {}", self.source, kind, self.message)
    }
}
