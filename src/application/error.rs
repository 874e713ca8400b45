// src/application/error.rs
use crate::domain::{
    errors::{DomainException, FieldError},
    user::UserStoreError,
};
use axum::http::StatusCode;
use serde_json::{Value, json};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, AppError>;

/// Every failure a request can end with.
///
/// The translator matches on this exhaustively; variant order mirrors the
/// classification order (domain, framework, unknown).
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainException),

    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Framework(#[from] FrameworkException),

    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(fields: Vec<FieldError>) -> Self {
        Self::Validation(fields)
    }

    pub fn unknown(err: impl Into<anyhow::Error>) -> Self {
        Self::Unknown(err.into())
    }
}

impl From<UserStoreError> for AppError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::DuplicateEmail => DomainException::email_exists().into(),
            UserStoreError::DuplicateUsername => DomainException::username_exists().into(),
            UserStoreError::Backend(err) => Self::Unknown(err),
        }
    }
}

/// Failure raised by the HTTP layer itself (body rejections, unmatched
/// routes, input pipes) rather than by application code.
///
/// `status` is kept as the raw number the framework reported; the payload
/// is free-form JSON whose `message`/`error` keys are inspected by shape.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct FrameworkException {
    status: u16,
    message: String,
    payload: Option<Value>,
}

impl FrameworkException {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            payload: None,
        }
    }

    pub fn from_status(status: StatusCode) -> Self {
        Self::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error"),
        )
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// 400 carrying one message per failed constraint.
    pub fn bad_request_with_messages(messages: Vec<String>) -> Self {
        let status = StatusCode::BAD_REQUEST;
        let reason = status.canonical_reason().unwrap_or("Bad Request");
        Self::new(status.as_u16(), reason).with_payload(json!({
            "statusCode": status.as_u16(),
            "message": messages,
            "error": reason,
        }))
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}

impl From<axum::extract::rejection::JsonRejection> for FrameworkException {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        let status = rejection.status();
        let reason = status.canonical_reason().unwrap_or("Bad Request");
        Self::new(status.as_u16(), reason).with_payload(json!({
            "statusCode": status.as_u16(),
            "message": rejection.body_text(),
            "error": reason,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taxonomy::ErrorCode;

    #[test]
    fn store_conflicts_become_domain_exceptions() {
        match AppError::from(UserStoreError::DuplicateEmail) {
            AppError::Domain(e) => {
                assert_eq!(e.code(), ErrorCode::UserEmailExists);
                assert_eq!(e.status(), StatusCode::CONFLICT);
            }
            other => panic!("unexpected: {other:?}"),
        }
        match AppError::from(UserStoreError::DuplicateUsername) {
            AppError::Domain(e) => assert_eq!(e.code(), ErrorCode::UserUsernameExists),
            other => panic!("unexpected: {other:?}"),
        }
        let backend = UserStoreError::from(anyhow::anyhow!("disk full"));
        assert!(matches!(AppError::from(backend), AppError::Unknown(_)));
    }

    #[test]
    fn from_status_uses_canonical_reason() {
        let err = FrameworkException::from_status(StatusCode::NOT_FOUND);
        assert_eq!(err.status(), 404);
        assert_eq!(err.message(), "Not Found");
        assert!(err.payload().is_none());
    }

    #[test]
    fn bad_request_payload_lists_messages() {
        let err = FrameworkException::bad_request_with_messages(vec!["a".into(), "b".into()]);
        let payload = err.payload().unwrap();
        assert_eq!(payload["message"], json!(["a", "b"]));
        assert_eq!(payload["error"], "Bad Request");
    }

    #[test]
    fn conversions_pick_the_right_variant() {
        let err: AppError = DomainException::user_not_found().into();
        assert!(matches!(err, AppError::Domain(_)));
        let err: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AppError::Unknown(_)));
        let err: AppError = FrameworkException::from_status(StatusCode::CONFLICT).into();
        assert!(matches!(err, AppError::Framework(_)));
    }
}
