// src/application/ports/error_sink.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warn,
    Error,
}

/// One structured entry per translated failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    pub severity: Severity,
    pub message: String,
    pub code: String,
    pub status_code: u16,
    pub path: Option<String>,
    /// Full detail of the original failure; only set for failures whose
    /// detail is withheld from the caller.
    pub cause: Option<String>,
}

/// Destination for translator log records.
pub trait ErrorSink: Send + Sync {
    fn record(&self, record: ErrorRecord);
}
