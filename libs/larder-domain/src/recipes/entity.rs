//! Domain entities for recipe search
//!
//! Candidate summaries come back from the search stage, detail records from the
//! per-recipe lookups, and the envelope is what both hosting adapters return.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::recipes::ids::RecipeId;

/// Message returned when the search stage finds no candidates
pub const NO_RECIPES_FOUND: &str = "No recipes found with these ingredients.";

/// Message returned when candidates existed but none passed the dietary filter
pub const NO_DIETARY_MATCHES: &str = "No recipes match your dietary restrictions.";

/// Minimal candidate record returned by the search stage
///
/// Only `id` is relied upon downstream; the rest is kept for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: RecipeId,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub used_ingredient_count: u32,

    #[serde(default)]
    pub missed_ingredient_count: u32,
}

impl RecipeSummary {
    /// Create a summary with only an id and title
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: RecipeId::new(id),
            title: title.into(),
            image: None,
            used_ingredient_count: 0,
            missed_ingredient_count: 0,
        }
    }
}

/// Full recipe record returned by the detail lookup
///
/// The record is kept as the JSON object the provider sent and serialized
/// back out unchanged, nulls and absent keys included. The accessors give a
/// typed view of the fields the filter and the front-end rely on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeDetail {
    fields: Map<String, Value>,
}

impl RecipeDetail {
    /// Create a detail record with only an id and title
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self::from_fields(Map::new())
            .with_field("id", id)
            .with_field("title", title.into())
    }

    /// Wrap a provider JSON object
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Set one field, replacing any previous value
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Recipe id, if the record carries a numeric one
    pub fn id(&self) -> Option<RecipeId> {
        self.fields.get("id").and_then(Value::as_u64).map(RecipeId::new)
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    pub fn image(&self) -> Option<&str> {
        self.fields.get("image").and_then(Value::as_str)
    }

    /// Preparation time in minutes
    pub fn ready_in_minutes(&self) -> Option<u64> {
        self.fields.get("readyInMinutes").and_then(Value::as_u64)
    }

    pub fn vegetarian(&self) -> bool {
        self.flag("vegetarian")
    }

    pub fn vegan(&self) -> bool {
        self.flag("vegan")
    }

    pub fn gluten_free(&self) -> bool {
        self.flag("glutenFree")
    }

    pub fn dairy_free(&self) -> bool {
        self.flag("dairyFree")
    }

    /// Raw value of any provider field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All provider fields
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    // Only a literal `true` counts, absent, null or non-boolean values do not
    fn flag(&self, key: &str) -> bool {
        matches!(self.fields.get(key), Some(Value::Bool(true)))
    }
}

/// Top-level response of a recipe search
///
/// `message` is present exactly when `recipes` is empty. It is serialized as
/// `null` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub recipes: Vec<RecipeDetail>,
    pub message: Option<String>,
}

impl ResultEnvelope {
    /// Envelope for a search that returned no candidates at all
    pub fn no_candidates() -> Self {
        Self {
            recipes: Vec::new(),
            message: Some(NO_RECIPES_FOUND.to_string()),
        }
    }

    /// Envelope for the output of the dietary filter
    pub fn from_filtered(recipes: Vec<RecipeDetail>) -> Self {
        let message = if recipes.is_empty() {
            Some(NO_DIETARY_MATCHES.to_string())
        } else {
            None
        };

        Self { recipes, message }
    }

    /// Check if the envelope holds no recipes
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
