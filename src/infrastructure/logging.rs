// src/infrastructure/logging.rs
use crate::application::ports::error_sink::{ErrorRecord, ErrorSink, Severity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,tower_http=info";

/// Installs the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| DEFAULT_FILTER.to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

/// Emits translator records as `tracing` events under the `api_error` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn record(&self, record: ErrorRecord) {
        let path = record.path.as_deref().unwrap_or("-");
        match record.severity {
            Severity::Warn => tracing::warn!(
                target: "api_error",
                code = %record.code,
                status = record.status_code,
                path,
                "{}",
                record.message
            ),
            Severity::Error => tracing::error!(
                target: "api_error",
                code = %record.code,
                status = record.status_code,
                path,
                cause = record.cause.as_deref().unwrap_or("-"),
                "{}",
                record.message
            ),
        }
    }
}
