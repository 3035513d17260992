//! Dietary restrictions and the recipe filter

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::RecipeDetail;

/// Dietary flags requested by the caller
///
/// A flag left `false` imposes no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietaryRestrictions {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
}

impl DietaryRestrictions {
    /// Parse the JSON-encoded `dietaryRestrictions` parameter
    ///
    /// Absent, blank or malformed JSON means no restrictions. A malformed value
    /// is logged and otherwise ignored, it never fails the request.
    pub fn from_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };

        match serde_json::from_str(raw) {
            Ok(restrictions) => restrictions,
            Err(err) => {
                warn!(error = %err, raw = %raw, "Ignoring malformed dietary restrictions");
                Self::default()
            }
        }
    }

    /// Check if no flag is set
    pub fn is_unrestricted(&self) -> bool {
        !(self.vegetarian || self.vegan || self.gluten_free || self.dairy_free)
    }

    /// Check if a recipe satisfies every requested flag
    ///
    /// A flag the record does not carry as `true` fails the check.
    pub fn permits(&self, recipe: &RecipeDetail) -> bool {
        (!self.vegetarian || recipe.vegetarian())
            && (!self.vegan || recipe.vegan())
            && (!self.gluten_free || recipe.gluten_free())
            && (!self.dairy_free || recipe.dairy_free())
    }
}

/// Keep the recipes that satisfy all requested restrictions, in input order
pub fn filter_recipes(
    recipes: Vec<RecipeDetail>,
    restrictions: &DietaryRestrictions,
) -> Vec<RecipeDetail> {
    if restrictions.is_unrestricted() {
        return recipes;
    }

    recipes
        .into_iter()
        .filter(|recipe| restrictions.permits(recipe))
        .collect()
}
