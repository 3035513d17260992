//! Recipe search domain module
//!
//! This module contains the entities, errors and pipeline stages of a recipe
//! search: normalize the ingredients, search candidates, fetch their details,
//! filter by dietary restrictions and wrap the result in an envelope.

mod entity;
mod error;
mod fanout;
mod ids;
mod query;
mod restrictions;
mod service;

#[cfg(test)]
mod testing;

pub use entity::{
    RecipeDetail, RecipeSummary, ResultEnvelope, NO_DIETARY_MATCHES, NO_RECIPES_FOUND,
};
pub use error::{ErrorBody, RecipeError, Result};
pub use fanout::fetch_details;
pub use ids::RecipeId;
pub use query::{normalize_ingredients, SearchQuery, DEFAULT_RESULT_LIMIT};
pub use restrictions::{filter_recipes, DietaryRestrictions};
pub use service::{RecipeSearchConfig, RecipeSearchService};
