//! Larder API - Recipe finder HTTP server
//!
//! Exposes the recipe search pipeline over HTTP, optionally serving the
//! browser front-end alongside it.

pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use larder_domain::RecipeSearchService;
use larder_spoonacular::SpoonacularClient;

pub use config::ServerConfig;
pub use routes::create_router;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub recipe_service: Arc<RecipeSearchService<SpoonacularClient>>,
}

impl AppState {
    /// Wrap a recipe search service for sharing across handlers
    pub fn new(recipe_service: RecipeSearchService<SpoonacularClient>) -> Self {
        Self {
            recipe_service: Arc::new(recipe_service),
        }
    }
}
