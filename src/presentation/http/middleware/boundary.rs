// src/presentation/http/middleware/boundary.rs
//! The single interception point for escaped handler errors.
//!
//! Installed once on the router; every error a handler surfaces is logged
//! and translated into a FAIL envelope here, independently per request.

use crate::presentation::http::error::{translate, BoundaryError, EscapedError};
use crate::presentation::http::state::HttpState;
use axum::extract::{Extension, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

pub async fn translate_errors(
    Extension(state): Extension<HttpState>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    let Some(EscapedError(escaped)) = response.extensions_mut().remove::<EscapedError>() else {
        return response;
    };

    match escaped.as_ref() {
        BoundaryError::Domain(domain) => {
            error!(code = domain.code(), error = %domain, "domain failure at boundary");
        }
        BoundaryError::System(source) => {
            error!(error = ?source, "unexpected failure at boundary");
        }
    }

    let (status, envelope) = translate(&escaped, state.catalog.as_ref(), &state.default_locale);
    (status, Json(envelope)).into_response()
}
