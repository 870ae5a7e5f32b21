// src/presentation/http/routes.rs
use crate::presentation::http::envelope::Envelope;
use crate::presentation::http::middleware::boundary;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{controllers::users, openapi, openapi::StatusResponse};
use axum::{http::Method, middleware, routing::get, Extension, Json, Router};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/users/{id}", get(users::get_user))
        .layer(middleware::from_fn(boundary::translate_errors))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = Envelope<StatusResponse>)
    ),
    tag = "System"
)]
pub async fn health() -> Json<Envelope<StatusResponse>> {
    Json(Envelope::success_with(StatusResponse {
        status: "ok".into(),
    }))
}
