// src/domain/errors.rs
use crate::domain::taxonomy::ErrorCode;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainException>;

/// One failed input field, as reported back to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }
}

/// Deliberate application-level failure carrying a stable code.
///
/// Immutable once built; the builder methods consume and return `self`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct DomainException {
    code: ErrorCode,
    message: String,
    status: StatusCode,
    details: Option<Value>,
}

impl DomainException {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            code.message().to_string()
        } else {
            message
        };
        Self {
            code,
            message,
            status: StatusCode::BAD_REQUEST,
            details: None,
        }
    }

    /// Taxonomy message and default status for `code`.
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.message()).with_status(code.default_status())
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    pub fn into_parts(self) -> (ErrorCode, String, StatusCode, Option<Value>) {
        (self.code, self.message, self.status, self.details)
    }

    /// Several field failures at once; the first one becomes the message.
    pub fn validation(fields: Vec<FieldError>) -> Self {
        let code = ErrorCode::ValValidationFailed;
        let message = fields
            .first()
            .map(|f| f.message.clone())
            .unwrap_or_else(|| code.message().to_string());
        Self::new(code, message).with_details(field_list(&fields))
    }

    pub fn field_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let error = FieldError::new(field, message);
        Self::new(ErrorCode::ValInvalidField, error.message.clone())
            .with_details(field_list(std::slice::from_ref(&error)))
    }

    pub fn required_field(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{field} is required");
        Self::new(ErrorCode::ValRequiredField, message.clone())
            .with_details(field_list(&[FieldError::new(field, message)]))
    }

    pub fn invalid_credentials() -> Self {
        Self::from_code(ErrorCode::AuthInvalidCredentials)
    }

    pub fn unauthorized() -> Self {
        Self::from_code(ErrorCode::AuthUnauthorized)
    }

    pub fn forbidden() -> Self {
        Self::from_code(ErrorCode::AuthForbidden)
    }

    pub fn email_exists() -> Self {
        Self::from_code(ErrorCode::UserEmailExists)
    }

    pub fn username_exists() -> Self {
        Self::from_code(ErrorCode::UserUsernameExists)
    }

    pub fn user_not_found() -> Self {
        Self::from_code(ErrorCode::UserNotFound)
    }

    pub fn resource_not_found(resource: impl AsRef<str>) -> Self {
        Self::from_code(ErrorCode::SysResourceNotFound)
            .with_details(serde_json::json!({ "resource": resource.as_ref() }))
    }
}

fn field_list(fields: &[FieldError]) -> Value {
    Value::Array(
        fields
            .iter()
            .map(|f| serde_json::to_value(f).unwrap_or(Value::Null))
            .collect(),
    )
}
