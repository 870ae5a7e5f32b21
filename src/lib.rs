// src/lib.rs
//! Result envelopes, assertion guards, and boundary error translation for
//! Axum backends.
//!
//! Business code validates with the guards in [`domain::assert`], propagates
//! [`domain::errors::DomainError`] with `?`, and the boundary middleware in
//! [`presentation::http::middleware::boundary`] translates whatever escapes
//! into an [`presentation::http::envelope::Envelope`] response.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::codes::{RESPONSE_CODE_SUCCESS, RESPONSE_CODE_SYSTEM_ERROR};
pub use domain::errors::{DomainError, DomainResult};
pub use infrastructure::messages::StaticMessageCatalog;
pub use presentation::http::envelope::{Envelope, Status};
pub use presentation::http::error::{BoundaryError, BoundaryResult};
