// src/presentation/http/routes.rs
use crate::application::error::FrameworkException;
use crate::presentation::http::controllers::users;
use crate::presentation::http::error::{ErrorScope, HttpError};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    extract::DefaultBodyLimit,
    http::{Method, StatusCode},
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_body_limit(state, DEFAULT_BODY_LIMIT)
}

pub fn build_router_with_body_limit(state: HttpState, body_limit: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/users", post(users::register))
        .route("/api/v1/users/{username}", get(users::get_user))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

async fn not_found(method: Method, scope: ErrorScope) -> HttpError {
    let path = scope.context().path().unwrap_or("/").to_string();
    scope.fail(
        FrameworkException::from_status(StatusCode::NOT_FOUND)
            .with_payload(serde_json::json!({
                "statusCode": 404,
                "message": format!("Cannot {method} {path}"),
                "error": "Not Found",
            })),
    )
}

async fn method_not_allowed(method: Method, scope: ErrorScope) -> HttpError {
    let path = scope.context().path().unwrap_or("/").to_string();
    scope.fail(
        FrameworkException::from_status(StatusCode::METHOD_NOT_ALLOWED).with_payload(
            serde_json::json!({
                "statusCode": 405,
                "message": format!("Cannot {method} {path}"),
                "error": "Method Not Allowed",
            }),
        ),
    )
}
