use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a recipe at the provider
///
/// RecipeId wraps the provider's numeric id so candidate ids cannot be mixed up
/// with result counts or other integers flowing through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(u64);

impl RecipeId {
    /// Create a RecipeId from the provider's numeric id
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecipeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<RecipeId> for u64 {
    fn from(id: RecipeId) -> Self {
        id.0
    }
}
