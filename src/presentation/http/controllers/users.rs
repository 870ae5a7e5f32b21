// src/presentation/http/controllers/users.rs
//! Demonstration lookup routes.
//!
//! These handlers exist to exercise the guard helpers and the boundary
//! translation end to end; the user directory is a fixed in-memory table,
//! not a persistence layer.

use crate::domain::assert::{ensure_with_args, require_some_with_args};
use crate::domain::errors::DomainError;
use crate::presentation::http::envelope::Envelope;
use crate::presentation::http::error::BoundaryResult;
use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: u64,
    pub username: String,
    pub display_name: String,
}

const DIRECTORY: &[(u64, &str, &str)] = &[
    (1, "admin", "Administrator"),
    (2, "alice", "Alice Cooper"),
    (3, "bob", "Bob Martin"),
];

fn find_user(id: u64) -> Option<UserDto> {
    DIRECTORY
        .iter()
        .find(|(uid, _, _)| *uid == id)
        .map(|(uid, username, display_name)| UserDto {
            id: *uid,
            username: (*username).to_string(),
            display_name: (*display_name).to_string(),
        })
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "Numeric user id")),
    responses(
        (status = 200, description = "Success or domain-failure envelope.", body = Envelope<UserDto>),
        (status = 500, description = "Unexpected failure envelope.")
    ),
    tag = "Users"
)]
pub async fn get_user(Path(id): Path<String>) -> BoundaryResult<Json<Envelope<UserDto>>> {
    ensure_with_args(
        !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()),
        "INVALID_USER_ID",
        vec![id.clone()],
    )?;
    // Digits only, but the value may still overflow u64.
    let id: u64 = id
        .parse()
        .map_err(|_| DomainError::with_args("INVALID_USER_ID", vec![id.clone()]))?;

    let user = require_some_with_args(find_user(id), "USER_NOT_FOUND", vec![id.to_string()])?;

    Ok(Json(
        Envelope::success_with(user).set_header("source", "directory"),
    ))
}
