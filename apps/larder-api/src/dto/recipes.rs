//! DTOs for recipe endpoints

use larder_domain::{ErrorBody, RecipeDetail, ResultEnvelope};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters of the recipe search endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipeQuery {
    /// Comma-separated ingredients
    #[param(example = "tomato,cheese,onion")]
    pub ingredients: Option<String>,

    /// JSON-encoded dietary restrictions
    #[serde(rename = "dietaryRestrictions")]
    #[param(example = r#"{"vegetarian":true,"glutenFree":false}"#)]
    pub dietary_restrictions: Option<String>,
}

/// Response body of a recipe search
#[derive(Debug, Serialize, ToSchema)]
pub struct RecipesResponse {
    /// Matching recipe detail records, in search order
    #[schema(value_type = Vec<Object>)]
    pub recipes: Vec<RecipeDetail>,
    /// Status message, present only when `recipes` is empty
    #[schema(example = "No recipes match your dietary restrictions.")]
    pub message: Option<String>,
}

impl From<ResultEnvelope> for RecipesResponse {
    fn from(envelope: ResultEnvelope) -> Self {
        Self {
            recipes: envelope.recipes,
            message: envelope.message,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Diagnostic error description
    #[schema(example = "Missing ingredients parameter")]
    pub error: String,
    /// Message safe to display to the user
    #[serde(rename = "userMessage")]
    #[schema(example = "Please provide ingredients to search for recipes.")]
    pub user_message: String,
}

impl From<ErrorBody> for ErrorResponse {
    fn from(body: ErrorBody) -> Self {
        Self {
            error: body.error,
            user_message: body.user_message,
        }
    }
}

/// Liveness response of the test endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "Server is running!")]
    pub message: String,
}
