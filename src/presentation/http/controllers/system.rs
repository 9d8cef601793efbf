// src/presentation/http/controllers/system.rs
use crate::application::error::ApplicationError;
use axum::{Json, extract::OriginalUri, http::Method};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}

/// Catch-all registered after every route.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApplicationError {
    ApplicationError::not_found(format!("Can't find {} on this server!", uri.path()))
}

pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApplicationError {
    ApplicationError::method_not_allowed(format!(
        "Method {method} is not allowed on {}",
        uri.path()
    ))
}
