//! Error types for the Spoonacular adapter

use thiserror::Error;

/// Errors that can occur while building the Spoonacular client
///
/// Request-time failures are reported as domain `RecipeError`s instead.
#[derive(Error, Debug)]
pub enum SpoonacularError {
    /// The underlying HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// A configuration value is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SpoonacularError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
