// src/presentation/http/openapi.rs
use crate::presentation::http::controllers::users::UserDto;
use crate::presentation::http::envelope::{Envelope, Status};
use axum::{response::Redirect, routing::get, Router};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::get_user,
        super::routes::health
    ),
    components(schemas(
        Status,
        StatusResponse,
        UserDto,
        Envelope<StatusResponse>,
        Envelope<UserDto>
    )),
    tags(
        (name = "System", description = "Service status endpoints."),
        (name = "Users", description = "Demonstration user lookup.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
