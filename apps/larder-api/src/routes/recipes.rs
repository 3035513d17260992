//! Recipe routes

use axum::{routing::get, Router};

use crate::{
    handlers::{
        fallback::{method_not_allowed_handler, test_handler},
        recipes::recipes_handler,
    },
    AppState,
};

/// Create recipe routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/recipes",
            get(recipes_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/api/test",
            get(test_handler).fallback(method_not_allowed_handler),
        )
}
