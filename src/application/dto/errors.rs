// src/application/dto/errors.rs
use crate::domain::{errors::FieldError, taxonomy::ErrorCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized error payload returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
    pub status_code: u16,
    pub details: Option<Value>,
    pub timestamp: String,
    pub path: Option<String>,
}

impl ErrorResponse {
    pub fn is_validation(&self) -> bool {
        ErrorCode::from_code_str(&self.code).is_some_and(|code| code.is_validation())
    }

    /// Typed view of a validation response; `None` when the code is not a
    /// validation code or the details are not field records.
    pub fn as_validation(&self) -> Option<ValidationErrorResponse> {
        if !self.is_validation() {
            return None;
        }
        let details: Vec<FieldError> = match &self.details {
            Some(value) => serde_json::from_value(value.clone()).ok()?,
            None => Vec::new(),
        };
        Some(ValidationErrorResponse {
            message: self.message.clone(),
            code: self.code.clone(),
            status_code: self.status_code,
            details,
            timestamp: self.timestamp.clone(),
            path: self.path.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    pub message: String,
    pub code: String,
    pub status_code: u16,
    pub details: Vec<FieldError>,
    pub timestamp: String,
    pub path: Option<String>,
}
