//! Domain errors for recipe search
//!
//! This module defines every failure the search pipeline can surface. Each
//! variant knows its HTTP status, its diagnostic `error` string and the
//! display-safe `userMessage`, so both hosting adapters render errors the same way.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::recipes::ids::RecipeId;

/// Errors that can occur while searching for recipes
///
/// The `Display` output carries diagnostic detail for the logs. What the caller
/// sees is built from [`RecipeError::error_message`] and
/// [`RecipeError::user_message`].
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The ingredients parameter was absent or blank
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// The ingredients parameter held no tokens
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The provider credential is not provisioned
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The search call to the provider failed
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// At least one detail lookup failed, so no results are returned
    #[error("Detail lookup for recipe {recipe_id} failed: {reason}")]
    PartialFailure { recipe_id: RecipeId, reason: String },

    /// Anything else
    #[error("Unhandled error: {0}")]
    Unhandled(String),
}

impl RecipeError {
    /// Create a missing parameter error
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    /// Create an invalid input error with a message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error with a message
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an upstream error carrying the provider's message
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Create a partial failure for the given recipe
    pub fn partial_failure(recipe_id: RecipeId, reason: impl Into<String>) -> Self {
        Self::PartialFailure {
            recipe_id,
            reason: reason.into(),
        }
    }

    /// Create an unhandled error with a message
    pub fn unhandled(msg: impl Into<String>) -> Self {
        Self::Unhandled(msg.into())
    }

    /// HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            Self::MissingParameter(_) | Self::InvalidInput(_) => 400,
            Self::Configuration(_)
            | Self::Upstream(_)
            | Self::PartialFailure { .. }
            | Self::Unhandled(_) => 500,
        }
    }

    /// Machine-oriented `error` field of the response body
    ///
    /// Only `Upstream` forwards its detail here (the provider's message).
    pub fn error_message(&self) -> String {
        match self {
            Self::MissingParameter(_) => "Missing ingredients parameter".to_string(),
            Self::InvalidInput(_) => "Invalid ingredients format".to_string(),
            Self::Configuration(_) => "Server configuration error: API key not found".to_string(),
            Self::Upstream(msg) => msg.clone(),
            Self::PartialFailure { .. } => "Error fetching recipe details".to_string(),
            Self::Unhandled(_) => "Internal Server Error".to_string(),
        }
    }

    /// Human-oriented `userMessage` field, always safe to display
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "Please provide ingredients to search for recipes.",
            Self::InvalidInput(_) => "Please provide valid ingredients separated by commas.",
            Self::Configuration(_) => {
                "The server is not properly configured. Please contact the administrator."
            }
            Self::Upstream(_) => {
                "An error occurred while fetching recipes. Please try again later."
            }
            Self::PartialFailure { .. } => {
                "Unable to fetch complete recipe information. Please try again."
            }
            Self::Unhandled(_) => "An unexpected error occurred. Please try again later.",
        }
    }

    /// Build the serialized error body for this error
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.error_message(),
            user_message: self.user_message().to_string(),
        }
    }
}

/// Serialized shape of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Diagnostic error string
    pub error: String,
    /// Display-safe message for the end user
    pub user_message: String,
}

impl ErrorBody {
    /// Create an error body from its two parts
    pub fn new(error: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            user_message: user_message.into(),
        }
    }

    /// Body for requests using a method other than GET
    pub fn method_not_allowed() -> Self {
        Self::new("Method Not Allowed", "Only GET requests are allowed.")
    }

    /// Body for unmatched routes
    pub fn not_found() -> Self {
        Self::new("Not Found", "The requested resource was not found.")
    }
}

impl From<&RecipeError> for ErrorBody {
    fn from(err: &RecipeError) -> Self {
        err.to_body()
    }
}

/// Result type alias for recipe operations
pub type Result<T> = std::result::Result<T, RecipeError>;
