// src/core/errors.rs

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the library.
pub type AuditResult<T> = Result<T, ErrorKind>;

#[derive(Debug, Error)]
pub enum ErrorKind {
    /// More headers reported missing than were checked. Only raised under
    /// [`ScorePolicy::Strict`](crate::core::score::ScorePolicy::Strict).
    #[error(
        "invalid audit summary: {headers_missing} headers missing out of {total_headers_checked} checked"
    )]
    InvalidSummary {
        headers_missing: u32,
        total_headers_checked: u32,
    },

    #[error("malformed audit document: {0}")]
    MalformedAudit(#[from] serde_json::Error),

    /// Valid JSON, but neither an audit response nor a bare summary.
    #[error("audit document does not contain a summary")]
    UnrecognizedDocument,

    #[error("invalid domain: {0:?}")]
    InvalidDomain(String),

    #[error("invalid audit service base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("unsupported audit service base URL: {0}")]
    UnsupportedBaseUrl(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
