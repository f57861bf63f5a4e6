use std::sync::Arc;

use poem::{Endpoint, EndpointExt, Route, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::presentation::http::endpoints::{
    root::{ApiState, Endpoints},
    users::UsersEndpoints,
};

pub mod endpoints;
pub mod errors;
pub mod mappers;
pub mod requests;
pub mod responses;

pub const API_PREFIX: &str = "/api/v1";

/// Full HTTP application: the versioned API plus Swagger UI at the root.
pub fn app(state: Arc<ApiState>, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (Endpoints, UsersEndpoints::new(state)),
        "Users API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{server_url}{API_PREFIX}"));
    let ui = api_service.swagger_ui();

    Route::new()
        .nest(API_PREFIX, api_service)
        .nest("/", ui)
        .with(Tracing)
}
