//! Catch-all handlers

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use larder_domain::{ErrorBody, RecipeError};
use tracing::debug;

use crate::{
    dto::recipes::{ErrorResponse, StatusResponse},
    handlers::recipes::error_response,
};

/// Reply to methods other than GET on the API routes
pub async fn method_not_allowed_handler() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::from(ErrorBody::method_not_allowed())),
    )
}

/// Reply to unmatched routes
pub async fn not_found_handler() -> impl IntoResponse {
    debug!("No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::from(ErrorBody::not_found())),
    )
}

/// Render a handler panic as the generic internal error
pub fn panic_handler(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "handler panicked".to_string()
    };

    error_response(&RecipeError::unhandled(detail))
}

/// Liveness check kept for the front-end
#[utoipa::path(
    get,
    path = "/api/test",
    responses(
        (status = 200, description = "Server is running", body = StatusResponse)
    ),
    tag = "health"
)]
pub async fn test_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Server is running!".to_string(),
    })
}
