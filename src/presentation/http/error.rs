// src/presentation/http/error.rs
//! Boundary error types and the exception-to-envelope translation policy.
//!
//! Handlers surface failures as [`BoundaryError`]; the boundary middleware
//! intercepts them once, logs them, and renders the response envelope.

use crate::application::ports::MessageCatalogPort;
use crate::domain::codes::RESPONSE_CODE_SYSTEM_ERROR;
use crate::domain::errors::DomainError;
use crate::presentation::http::envelope::Envelope;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoundaryError {
    /// Expected business failure; rides a 200 transport with a FAIL envelope.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Anything else that escaped a handler.
    #[error(transparent)]
    System(#[from] anyhow::Error),
}

pub type BoundaryResult<T> = Result<T, BoundaryError>;

/// Escaped error stashed in response extensions for the boundary middleware.
/// `http::Extensions` requires `Clone`, hence the `Arc`.
#[derive(Debug, Clone)]
pub(crate) struct EscapedError(pub(crate) Arc<BoundaryError>);

impl IntoResponse for BoundaryError {
    fn into_response(self) -> Response {
        // The boundary middleware rewrites this into the final envelope; the
        // status here only stands in when the middleware is not installed.
        let status = match &self {
            Self::Domain(_) => StatusCode::OK,
            Self::System(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let mut response = status.into_response();
        response.extensions_mut().insert(EscapedError(Arc::new(self)));
        response
    }
}

/// Map an escaped error to a transport status and a FAIL envelope.
///
/// Domain failures resolve their message as: literal message if present,
/// otherwise a catalog lookup by code/args/locale, otherwise the raw code
/// (a missing template is never fatal). Non-domain failures map to the
/// system-error code with the raw error message and a 500 status.
pub fn translate(
    error: &BoundaryError,
    catalog: &MessageCatalogPort,
    locale: &str,
) -> (StatusCode, Envelope<()>) {
    match error {
        BoundaryError::Domain(domain) => {
            let message = domain
                .message()
                .map(str::to_string)
                .or_else(|| catalog.resolve(domain.code(), domain.args(), locale))
                .unwrap_or_else(|| domain.code().to_string());
            (StatusCode::OK, Envelope::failure(domain.code(), message))
        }
        BoundaryError::System(source) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Envelope::failure(RESPONSE_CODE_SYSTEM_ERROR, source.to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::messages::MessageCatalog;

    struct StubCatalog;

    impl MessageCatalog for StubCatalog {
        fn resolve(&self, code: &str, args: &[String], locale: &str) -> Option<String> {
            (code == "KNOWN").then(|| format!("known failure ({locale}): {}", args.join(", ")))
        }
    }

    #[test]
    fn domain_error_with_literal_message_is_used_verbatim() {
        let error = BoundaryError::from(DomainError::with_message("E001", "explicit"));
        let (status, envelope) = translate(&error, &StubCatalog, "en");
        assert_eq!(status, StatusCode::OK);
        assert!(!envelope.is_success());
        assert_eq!(envelope.response_code(), "E001");
        assert_eq!(envelope.response_message(), Some("explicit"));
    }

    #[test]
    fn domain_error_without_message_resolves_from_catalog() {
        let error = BoundaryError::from(DomainError::with_args("KNOWN", vec!["x".into()]));
        let (status, envelope) = translate(&error, &StubCatalog, "en");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(envelope.response_code(), "KNOWN");
        assert_eq!(envelope.response_message(), Some("known failure (en): x"));
    }

    #[test]
    fn uncatalogued_code_degrades_to_echoing_the_code() {
        let error = BoundaryError::from(DomainError::new("UNLISTED"));
        let (status, envelope) = translate(&error, &StubCatalog, "en");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(envelope.response_code(), "UNLISTED");
        assert_eq!(envelope.response_message(), Some("UNLISTED"));
    }

    #[test]
    fn system_error_maps_to_internal_server_error() {
        let error = BoundaryError::from(anyhow::anyhow!("disk on fire"));
        let (status, envelope) = translate(&error, &StubCatalog, "en");
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.response_code(), RESPONSE_CODE_SYSTEM_ERROR);
        assert_eq!(envelope.response_message(), Some("disk on fire"));
    }
}
