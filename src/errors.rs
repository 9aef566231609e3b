/**
 * sqliprobe - Error Types
 * Input errors are fatal, baseline failures skip a target, probe failures
 * fail a single (target, payload) unit
 */

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// Unreadable URL or payload list. Fatal - no scan is attempted.
    #[error("cannot read {path}: {source}")]
    InputFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no payloads loaded from {path}")]
    EmptyPayloadList { path: String },

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The unpayloaded request itself failed. The whole target is skipped:
    /// every classification heuristic is baseline-relative.
    #[error("baseline request failed for {url}: {reason}")]
    BaselineFailed { url: String, reason: String },

    #[error("connection timeout after {timeout:?} to {url}")]
    ConnectionTimeout { url: String, timeout: Duration },

    #[error("connection failed for {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("request failed for {url}: {reason}")]
    Request { url: String, reason: String },
}

impl ScanError {
    /// Classify a reqwest error into the probe-failure taxonomy.
    ///
    /// `timeout` is the configured per-request limit, reported in the message
    /// because reqwest's own timeout error does not carry the duration.
    pub fn from_request_error(err: reqwest::Error, timeout: Duration) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();

        if err.is_timeout() {
            ScanError::ConnectionTimeout { url, timeout }
        } else if err.is_connect() {
            ScanError::ConnectionFailed {
                url,
                reason: err.to_string(),
            }
        } else {
            ScanError::Request {
                url,
                reason: err.to_string(),
            }
        }
    }
}

/// Result type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;
