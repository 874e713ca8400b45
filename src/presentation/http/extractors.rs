// src/presentation/http/extractors.rs
use crate::{
    application::{
        AppError,
        error::FrameworkException,
        translator::RequestContext,
        validation::{Validate, flatten_validation_errors},
    },
    presentation::http::{
        error::{ErrorScope, HttpError},
        state::HttpState,
    },
};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, OriginalUri, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

fn request_context(parts: &Parts) -> RequestContext {
    let path = parts
        .extensions
        .get::<OriginalUri>()
        .map(|uri| uri.0.path().to_string())
        .unwrap_or_else(|| parts.uri.path().to_string());
    RequestContext::new(path)
}

impl<S> FromRequestParts<S> for ErrorScope
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = request_context(parts);
        let state = parts
            .extensions
            .get::<HttpState>()
            .ok_or_else(|| HttpError::unavailable_translator(&ctx))?;
        Ok(ErrorScope::new(state.services.errors(), ctx))
    }
}

/// JSON body that has been deserialized and passed its own [`Validate`]
/// checks. Rejections are translated like any other failure.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let scope = ErrorScope::from_request_parts(&mut parts, state).await?;
        let max_depth = parts
            .extensions
            .get::<HttpState>()
            .map(|s| s.max_validation_depth)
            .unwrap_or(crate::application::validation::DEFAULT_MAX_DEPTH);

        let req = Request::from_parts(parts, body);
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| scope.fail(FrameworkException::from(rejection)))?;

        match flatten_validation_errors(&value.validate(), max_depth) {
            Ok(messages) if messages.is_empty() => Ok(Self(value)),
            Ok(messages) => Err(scope.fail(FrameworkException::bad_request_with_messages(messages))),
            Err(err) => Err(scope.fail(AppError::unknown(err))),
        }
    }
}
