// src/application/translator.rs
//! Turns any request failure into exactly one [`ErrorResponse`].
//!
//! Classification is first-match in a fixed order: domain failures,
//! framework failures (inspected by payload shape), then everything else.
//! The last bucket never exposes the original failure to the caller; its
//! detail only reaches the error sink.

use crate::application::{
    dto::ErrorResponse,
    error::{AppError, FrameworkException},
    ports::{
        ClockPort, ErrorSinkPort,
        error_sink::{ErrorRecord, Severity},
    },
};
use crate::domain::{errors::DomainException, taxonomy::fallback};
use axum::http::StatusCode;
use chrono::SecondsFormat;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Per-request data stamped onto the response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    path: Option<String>,
}

impl RequestContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn without_path() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

#[derive(Debug, Error)]
enum TranslateError {
    #[error("framework failure carried invalid status {status}: {message}")]
    InvalidStatus { status: u16, message: String },
}

struct Classified {
    message: String,
    code: String,
    status: StatusCode,
    details: Option<Value>,
    cause: Option<String>,
}

impl Classified {
    fn domain(err: DomainException) -> Self {
        let (code, message, status, details) = err.into_parts();
        Self {
            message,
            code: code.as_str().to_string(),
            status,
            details,
            cause: None,
        }
    }

    fn internal(cause: String) -> Self {
        Self {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            code: fallback::INTERNAL_SERVER_ERROR.to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
            details: None,
            cause: Some(cause),
        }
    }
}

pub struct ErrorTranslator {
    clock: Arc<ClockPort>,
    sink: Arc<ErrorSinkPort>,
}

impl ErrorTranslator {
    pub fn new(clock: Arc<ClockPort>, sink: Arc<ErrorSinkPort>) -> Self {
        Self { clock, sink }
    }

    pub fn translate(&self, failure: AppError, ctx: &RequestContext) -> ErrorResponse {
        let classified = match classify(failure) {
            Ok(classified) => classified,
            Err(err) => Classified::internal(err.to_string()),
        };

        let severity = if classified.cause.is_some() || classified.status.is_server_error() {
            Severity::Error
        } else {
            Severity::Warn
        };

        let response = ErrorResponse {
            message: classified.message,
            code: classified.code,
            status_code: classified.status.as_u16(),
            details: classified.details,
            timestamp: self
                .clock
                .now()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            path: ctx.path().map(str::to_string),
        };

        self.sink.record(ErrorRecord {
            severity,
            message: response.message.clone(),
            code: response.code.clone(),
            status_code: response.status_code,
            path: response.path.clone(),
            cause: classified.cause,
        });

        response
    }
}

fn classify(failure: AppError) -> Result<Classified, TranslateError> {
    match failure {
        AppError::Domain(err) => Ok(Classified::domain(err)),
        AppError::Validation(fields) => Ok(Classified::domain(DomainException::validation(fields))),
        AppError::Framework(err) => classify_framework(err),
        AppError::Unknown(err) => Ok(Classified::internal(format!("{err:?}"))),
    }
}

fn classify_framework(err: FrameworkException) -> Result<Classified, TranslateError> {
    let status = StatusCode::from_u16(err.status()).map_err(|_| TranslateError::InvalidStatus {
        status: err.status(),
        message: err.message().to_string(),
    })?;

    let (message, details) =
        payload_message(err.payload()).unwrap_or_else(|| (err.message().to_string(), None));

    let message = if !message.trim().is_empty() {
        message
    } else if !err.message().trim().is_empty() {
        err.message().to_string()
    } else {
        status.canonical_reason().unwrap_or("Unknown error").to_string()
    };

    Ok(Classified {
        message,
        code: fallback::code_for_status(status.as_u16()).to_string(),
        status,
        details,
        cause: None,
    })
}

/// Reads the `message` key of a framework payload.
///
/// A non-empty list of strings becomes the details with its head promoted
/// to the message; a plain string is paired with the `error` descriptor.
/// Any other shape is not recognized.
fn payload_message(payload: Option<&Value>) -> Option<(String, Option<Value>)> {
    let payload = payload?;
    match payload.get("message")? {
        Value::Array(items) if items.iter().all(Value::is_string) => {
            let first = items.first().and_then(Value::as_str)?;
            Some((first.to_string(), Some(Value::Array(items.clone()))))
        }
        Value::String(message) => {
            let descriptor = payload.get("error").filter(|v| !v.is_null()).cloned();
            Some((message.clone(), descriptor))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{error_sink::ErrorSink, time::Clock};
    use crate::domain::{errors::FieldError, taxonomy::ErrorCode};
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;
    use std::sync::Mutex;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap()
        }
    }

    #[derive(Default)]
    struct CapturingSink {
        records: Mutex<Vec<ErrorRecord>>,
    }

    impl CapturingSink {
        fn records(&self) -> Vec<ErrorRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    impl ErrorSink for CapturingSink {
        fn record(&self, record: ErrorRecord) {
            self.records.lock().unwrap().push(record);
        }
    }

    fn translator() -> (ErrorTranslator, Arc<CapturingSink>) {
        let sink = Arc::new(CapturingSink::default());
        let translator = ErrorTranslator::new(Arc::new(FixedClock), sink.clone());
        (translator, sink)
    }

    fn ctx() -> RequestContext {
        RequestContext::new("/graphql")
    }

    #[test]
    fn domain_exceptions_are_copied_verbatim() {
        let (translator, _) = translator();
        let cases = vec![
            DomainException::email_exists(),
            DomainException::user_not_found(),
            DomainException::invalid_credentials(),
            DomainException::new(ErrorCode::SysServiceUnavailable, "maintenance")
                .with_status(StatusCode::SERVICE_UNAVAILABLE)
                .with_details(json!({ "retryAfter": 30 })),
        ];
        for err in cases {
            let expected = err.clone();
            let resp = translator.translate(AppError::Domain(err), &ctx());
            assert_eq!(resp.code, expected.code().as_str());
            assert_eq!(resp.status_code, expected.status().as_u16());
            assert_eq!(resp.message, expected.message());
            assert_eq!(resp.details.as_ref(), expected.details());
        }
    }

    #[test]
    fn response_is_stamped_with_time_and_path() {
        let (translator, _) = translator();
        let resp = translator.translate(DomainException::user_not_found().into(), &ctx());
        assert_eq!(resp.timestamp, "2024-01-01T12:30:00.000Z");
        assert_eq!(resp.path.as_deref(), Some("/graphql"));

        let resp = translator.translate(
            DomainException::user_not_found().into(),
            &RequestContext::without_path(),
        );
        assert_eq!(resp.path, None);
    }

    #[test]
    fn validation_exception_with_single_field() {
        let (translator, _) = translator();
        let resp = translator.translate(
            AppError::validation(vec![FieldError::new("email", "Invalid email format")]),
            &ctx(),
        );
        assert_eq!(resp.message, "Invalid email format");
        assert_eq!(resp.code, "VAL_VALIDATION_FAILED");
        assert_eq!(resp.status_code, 400);
        assert_eq!(
            resp.details,
            Some(json!([{ "field": "email", "message": "Invalid email format" }]))
        );
        let view = resp.as_validation().unwrap();
        assert_eq!(view.details.len(), 1);
    }

    #[test]
    fn unknown_failures_are_generic_and_logged_with_detail() {
        let (translator, sink) = translator();
        let resp = translator.translate(
            anyhow::anyhow!("connection reset by peer").into(),
            &ctx(),
        );
        assert_eq!(resp.message, "Internal server error");
        assert_eq!(resp.code, "INTERNAL_SERVER_ERROR");
        assert_eq!(resp.status_code, 500);
        assert_eq!(resp.details, None);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Error);
        assert!(
            records[0]
                .cause
                .as_deref()
                .is_some_and(|c| c.contains("connection reset by peer"))
        );
        let body = serde_json::to_string(&resp).unwrap();
        assert!(!body.contains("connection reset"));
    }

    #[test]
    fn framework_message_list_becomes_details() {
        let (translator, _) = translator();
        let err = FrameworkException::bad_request_with_messages(vec![
            "email must be an email".into(),
            "username should not be empty".into(),
        ]);
        let resp = translator.translate(err.into(), &ctx());
        assert_eq!(resp.message, "email must be an email");
        assert_eq!(resp.code, "BAD_REQUEST");
        assert_eq!(
            resp.details,
            Some(json!(["email must be an email", "username should not be empty"]))
        );
    }

    #[test]
    fn framework_string_message_pairs_with_descriptor() {
        let (translator, _) = translator();
        let err = FrameworkException::new(403, "Forbidden resource").with_payload(json!({
            "statusCode": 403,
            "message": "Forbidden resource",
            "error": "Forbidden",
        }));
        let resp = translator.translate(err.into(), &ctx());
        assert_eq!(resp.message, "Forbidden resource");
        assert_eq!(resp.code, "FORBIDDEN");
        assert_eq!(resp.details, Some(json!("Forbidden")));

        let err = FrameworkException::new(409, "Conflict")
            .with_payload(json!({ "message": "Duplicate entry" }));
        let resp = translator.translate(err.into(), &ctx());
        assert_eq!(resp.message, "Duplicate entry");
        assert_eq!(resp.details, None);
    }

    #[test]
    fn framework_without_recognised_shape_uses_status_table() {
        let (translator, _) = translator();
        let resp = translator.translate(FrameworkException::new(404, "Cannot GET /nope").into(), &ctx());
        assert_eq!(resp.code, "NOT_FOUND");
        assert_eq!(resp.status_code, 404);
        assert_eq!(resp.message, "Cannot GET /nope");

        let err = FrameworkException::new(422, "Unprocessable Entity")
            .with_payload(json!({ "message": [1, 2] }));
        let resp = translator.translate(err.into(), &ctx());
        assert_eq!(resp.code, "UNPROCESSABLE_ENTITY");
        assert_eq!(resp.message, "Unprocessable Entity");
        assert_eq!(resp.details, None);

        let resp = translator.translate(FrameworkException::new(418, "").into(), &ctx());
        assert_eq!(resp.code, "UNKNOWN_ERROR");
        assert_eq!(resp.status_code, 418);
        assert_eq!(resp.message, "I'm a teapot");
    }

    #[test]
    fn invalid_framework_status_degrades_to_generic_response() {
        let (translator, sink) = translator();
        let resp = translator.translate(FrameworkException::new(42, "weird").into(), &ctx());
        assert_eq!(resp.code, "INTERNAL_SERVER_ERROR");
        assert_eq!(resp.status_code, 500);
        assert_eq!(resp.message, "Internal server error");
        assert_eq!(sink.records().len(), 1);
        assert_eq!(sink.records()[0].severity, Severity::Error);
    }

    #[test]
    fn every_translation_logs_exactly_once() {
        let (translator, sink) = translator();
        translator.translate(DomainException::email_exists().into(), &ctx());
        translator.translate(FrameworkException::new(401, "Unauthorized").into(), &ctx());
        translator.translate(anyhow::anyhow!("boom").into(), &ctx());

        let records = sink.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].code, "USER_EMAIL_EXISTS");
        assert_eq!(records[0].status_code, 409);
        assert_eq!(records[0].severity, Severity::Warn);
        assert_eq!(records[0].cause, None);
        assert_eq!(records[1].code, "UNAUTHORIZED");
        assert_eq!(records[2].code, "INTERNAL_SERVER_ERROR");
    }

    #[tokio::test]
    async fn concurrent_translations_do_not_share_state() {
        let (translator, sink) = translator();
        let translator = Arc::new(translator);

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let translator = Arc::clone(&translator);
                tokio::spawn(async move {
                    let field = format!("field{i}");
                    let path = format!("/req/{i}");
                    let resp = translator.translate(
                        DomainException::field_validation(field.clone(), "bad").into(),
                        &RequestContext::new(path.clone()),
                    );
                    (field, path, resp)
                })
            })
            .collect();

        for handle in handles {
            let (field, path, resp) = handle.await.unwrap();
            assert_eq!(resp.path.as_deref(), Some(path.as_str()));
            assert_eq!(resp.details, Some(json!([{ "field": field, "message": "bad" }])));
        }
        assert_eq!(sink.records().len(), 16);
    }
}
