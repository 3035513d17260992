//! API routes

pub mod recipes;

use axum::{handler::HandlerWithoutStateExt, Router};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::ServerConfig,
    dto::recipes::{ErrorResponse, RecipesResponse, StatusResponse},
    handlers::{
        self,
        fallback::{not_found_handler, panic_handler},
    },
    AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::recipes::recipes_handler,
        handlers::fallback::test_handler,
        health_handler
    ),
    components(
        schemas(RecipesResponse, ErrorResponse, StatusResponse)
    ),
    tags(
        (name = "recipes", description = "Recipe search endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Larder API",
        version = "0.1.0",
        description = "Find recipes from the ingredients you have, filtered by diet",
        contact(
            name = "Larder Team"
        )
    )
)]
pub struct ApiDoc;

/// Create the main application router
///
/// Unmatched paths fall through to the static front-end when
/// `config.static_dir` is set, and to a JSON 404 otherwise. A panicking
/// handler is answered with the JSON internal error.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(recipes::routes())
        .route("/health", axum::routing::get(health_handler));

    let router = match &config.static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(not_found_handler.into_service()),
        ),
        None => router.fallback(not_found_handler),
    };

    router
        .layer(CatchPanicLayer::custom(panic_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
