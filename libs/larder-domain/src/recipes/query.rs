//! Ingredient normalization and the search query

use super::{RecipeError, Result};

/// Number of candidates requested from the search stage
pub const DEFAULT_RESULT_LIMIT: u32 = 12;

/// Normalize free-text ingredient input into a canonical comma-separated list
///
/// The input is split on commas, each token trimmed and empty tokens dropped.
/// It is expected already decoded from the query string by the hosting
/// adapter, so `+` and `%` are kept as literal characters.
///
/// # Errors
///
/// Returns `RecipeError::InvalidInput` if no token survives.
///
/// # Example
///
/// ```rust
/// use larder_domain::recipes::normalize_ingredients;
///
/// let normalized = normalize_ingredients("  tomato ,cheese,, onion ").unwrap();
/// assert_eq!(normalized, "tomato,cheese,onion");
/// ```
pub fn normalize_ingredients(raw: &str) -> Result<String> {
    Ok(ingredient_tokens(raw)?.join(","))
}

fn ingredient_tokens(raw: &str) -> Result<Vec<String>> {
    let tokens: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        return Err(RecipeError::invalid_input("no ingredients left after normalization"));
    }

    Ok(tokens)
}

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    ingredients: Vec<String>,
    result_limit: u32,
}

impl SearchQuery {
    /// Build a query from the raw `ingredients` parameter
    ///
    /// # Errors
    ///
    /// - `RecipeError::MissingParameter` if the parameter is absent, empty or blank
    /// - `RecipeError::InvalidInput` if normalization fails
    pub fn from_raw(raw: Option<&str>, result_limit: u32) -> Result<Self> {
        let raw = match raw {
            Some(value) if !value.trim().is_empty() => value,
            _ => return Err(RecipeError::missing_parameter("ingredients")),
        };

        Ok(Self {
            ingredients: ingredient_tokens(raw)?,
            result_limit,
        })
    }

    /// Normalized ingredient tokens, in input order
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Comma-joined ingredients as sent to the provider
    pub fn ingredients_param(&self) -> String {
        self.ingredients.join(",")
    }

    /// Number of candidates to request
    pub fn result_limit(&self) -> u32 {
        self.result_limit
    }
}
