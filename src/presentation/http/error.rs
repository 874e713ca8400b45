// src/presentation/http/error.rs
use crate::application::{
    AppError, ApplicationResult,
    dto::ErrorResponse,
    translator::{ErrorTranslator, RequestContext},
};
use crate::infrastructure::{logging::TracingErrorSink, time::SystemClock};
use anyhow::anyhow;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A translated failure, ready to be written to the client.
#[derive(Debug)]
pub struct HttpError {
    response: ErrorResponse,
}

impl HttpError {
    pub fn from_error(translator: &ErrorTranslator, err: AppError, ctx: &RequestContext) -> Self {
        Self {
            response: translator.translate(err, ctx),
        }
    }

    /// Used when the request never passed through the state layer, so the
    /// configured translator is not reachable. Falls back to one wired to the
    /// system clock and the tracing sink.
    pub fn unavailable_translator(ctx: &RequestContext) -> Self {
        let translator = ErrorTranslator::new(Arc::new(SystemClock), Arc::new(TracingErrorSink));
        Self::from_error(
            &translator,
            AppError::unknown(anyhow!("application state missing from request extensions")),
            ctx,
        )
    }

    pub fn response(&self) -> &ErrorResponse {
        &self.response
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.response.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorEnvelope::from(self.response))).into_response()
    }
}

/// GraphQL-style outer wrapping: the normalized payload travels in
/// `extensions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<EnvelopeError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeError {
    pub message: String,
    pub extensions: ErrorResponse,
}

impl From<ErrorResponse> for ErrorEnvelope {
    fn from(response: ErrorResponse) -> Self {
        Self {
            errors: vec![EnvelopeError {
                message: response.message.clone(),
                extensions: response,
            }],
        }
    }
}

/// Everything a handler needs to turn a failure into an [`HttpError`].
#[derive(Clone)]
pub struct ErrorScope {
    translator: Arc<ErrorTranslator>,
    ctx: RequestContext,
}

impl ErrorScope {
    pub fn new(translator: Arc<ErrorTranslator>, ctx: RequestContext) -> Self {
        Self { translator, ctx }
    }

    pub fn context(&self) -> &RequestContext {
        &self.ctx
    }

    pub fn fail(&self, err: impl Into<AppError>) -> HttpError {
        HttpError::from_error(&self.translator, err.into(), &self.ctx)
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self, scope: &ErrorScope) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self, scope: &ErrorScope) -> HttpResult<T> {
        self.map_err(|err| scope.fail(err))
    }
}
