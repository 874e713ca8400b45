// src/domain/taxonomy.rs
//! Closed set of error codes the API can report for expected failures.
//!
//! Codes are part of the public contract: clients match on them, so entries
//! may be added but never renamed or removed.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorDomain {
    Auth,
    User,
    Validation,
    System,
}

impl ErrorDomain {
    pub fn prefix(&self) -> &'static str {
        match self {
            ErrorDomain::Auth => "AUTH_",
            ErrorDomain::User => "USER_",
            ErrorDomain::Validation => "VAL_",
            ErrorDomain::System => "SYS_",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // auth
    AuthInvalidCredentials,
    AuthUnauthorized,
    AuthForbidden,
    AuthTokenExpired,
    AuthTokenInvalid,

    // user
    UserNotFound,
    UserEmailExists,
    UserUsernameExists,

    // validation
    ValValidationFailed,
    ValInvalidField,
    ValRequiredField,

    // system
    SysInternalError,
    SysResourceNotFound,
    SysServiceUnavailable,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 14] = [
        ErrorCode::AuthInvalidCredentials,
        ErrorCode::AuthUnauthorized,
        ErrorCode::AuthForbidden,
        ErrorCode::AuthTokenExpired,
        ErrorCode::AuthTokenInvalid,
        ErrorCode::UserNotFound,
        ErrorCode::UserEmailExists,
        ErrorCode::UserUsernameExists,
        ErrorCode::ValValidationFailed,
        ErrorCode::ValInvalidField,
        ErrorCode::ValRequiredField,
        ErrorCode::SysInternalError,
        ErrorCode::SysResourceNotFound,
        ErrorCode::SysServiceUnavailable,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AuthInvalidCredentials => "AUTH_INVALID_CREDENTIALS",
            Self::AuthUnauthorized => "AUTH_UNAUTHORIZED",
            Self::AuthForbidden => "AUTH_FORBIDDEN",
            Self::AuthTokenExpired => "AUTH_TOKEN_EXPIRED",
            Self::AuthTokenInvalid => "AUTH_TOKEN_INVALID",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserEmailExists => "USER_EMAIL_EXISTS",
            Self::UserUsernameExists => "USER_USERNAME_EXISTS",
            Self::ValValidationFailed => "VAL_VALIDATION_FAILED",
            Self::ValInvalidField => "VAL_INVALID_FIELD",
            Self::ValRequiredField => "VAL_REQUIRED_FIELD",
            Self::SysInternalError => "SYS_INTERNAL_ERROR",
            Self::SysResourceNotFound => "SYS_RESOURCE_NOT_FOUND",
            Self::SysServiceUnavailable => "SYS_SERVICE_UNAVAILABLE",
        }
    }

    /// Default human-readable message paired with the code.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::AuthInvalidCredentials => "Invalid email or password",
            Self::AuthUnauthorized => "Authentication required",
            Self::AuthForbidden => "You do not have permission to perform this action",
            Self::AuthTokenExpired => "Session has expired, please sign in again",
            Self::AuthTokenInvalid => "Invalid authentication token",
            Self::UserNotFound => "User not found",
            Self::UserEmailExists => "Email already exists",
            Self::UserUsernameExists => "Username already exists",
            Self::ValValidationFailed => "Validation failed",
            Self::ValInvalidField => "Invalid field value",
            Self::ValRequiredField => "Required field is missing",
            Self::SysInternalError => "Something went wrong, please try again later",
            Self::SysResourceNotFound => "Requested resource was not found",
            Self::SysServiceUnavailable => "Service temporarily unavailable",
        }
    }

    /// Status the code is raised with when no explicit status is given.
    pub fn default_status(&self) -> StatusCode {
        match self {
            Self::AuthInvalidCredentials
            | Self::AuthUnauthorized
            | Self::AuthTokenExpired
            | Self::AuthTokenInvalid => StatusCode::UNAUTHORIZED,
            Self::AuthForbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::SysResourceNotFound => StatusCode::NOT_FOUND,
            Self::UserEmailExists | Self::UserUsernameExists => StatusCode::CONFLICT,
            Self::ValValidationFailed | Self::ValInvalidField | Self::ValRequiredField => {
                StatusCode::BAD_REQUEST
            }
            Self::SysInternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SysServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn domain(&self) -> ErrorDomain {
        match self {
            Self::AuthInvalidCredentials
            | Self::AuthUnauthorized
            | Self::AuthForbidden
            | Self::AuthTokenExpired
            | Self::AuthTokenInvalid => ErrorDomain::Auth,
            Self::UserNotFound | Self::UserEmailExists | Self::UserUsernameExists => {
                ErrorDomain::User
            }
            Self::ValValidationFailed | Self::ValInvalidField | Self::ValRequiredField => {
                ErrorDomain::Validation
            }
            Self::SysInternalError | Self::SysResourceNotFound | Self::SysServiceUnavailable => {
                ErrorDomain::System
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        self.domain() == ErrorDomain::Validation
    }

    pub fn from_code_str(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|code| code.as_str() == value)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Codes used for failures that never went through the taxonomy.
pub mod fallback {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const CONFLICT: &str = "CONFLICT";
    pub const UNPROCESSABLE_ENTITY: &str = "UNPROCESSABLE_ENTITY";
    pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";
    pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

    pub const ALL: [&str; 8] = [
        BAD_REQUEST,
        UNAUTHORIZED,
        FORBIDDEN,
        NOT_FOUND,
        CONFLICT,
        UNPROCESSABLE_ENTITY,
        INTERNAL_SERVER_ERROR,
        UNKNOWN_ERROR,
    ];

    /// Total mapping from a numeric status to its fallback code.
    pub fn code_for_status(status: u16) -> &'static str {
        match status {
            400 => BAD_REQUEST,
            401 => UNAUTHORIZED,
            403 => FORBIDDEN,
            404 => NOT_FOUND,
            409 => CONFLICT,
            422 => UNPROCESSABLE_ENTITY,
            500 => INTERNAL_SERVER_ERROR,
            _ => UNKNOWN_ERROR,
        }
    }
}

/// Whether `code` belongs to the taxonomy or the fallback set.
pub fn is_known_code(code: &str) -> bool {
    ErrorCode::from_code_str(code).is_some() || fallback::ALL.contains(&code)
}
