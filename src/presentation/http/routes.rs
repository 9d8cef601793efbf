// src/presentation/http/routes.rs
use crate::presentation::http::boundary::FailureBoundaryLayer;
use crate::presentation::http::controllers::{system, tours};
use crate::presentation::http::error::ErrorResponder;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, responder: ErrorResponder) -> Router {
    build_router_with_origins(state, responder, &[])
}

/// Assemble the application router. The failure boundary is applied last so
/// it wraps every route, the not-found fallback and the method fallback; no
/// handler can be registered outside of it.
pub fn build_router_with_origins(
    state: HttpState,
    responder: ErrorResponder,
    allowed_origins: &[String],
) -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route(
            "/api/v1/tours",
            get(tours::list_tours).post(tours::create_tour),
        )
        .route(
            "/api/v1/tours/{id}",
            get(tours::get_tour)
                .patch(tours::update_tour)
                .delete(tours::delete_tour),
        )
        .fallback(system::route_not_found)
        .method_not_allowed_fallback(system::method_not_allowed)
        .layer(FailureBoundaryLayer::new(responder))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}
