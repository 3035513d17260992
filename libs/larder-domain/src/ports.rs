//! Ports (trait definitions) for external dependencies
//!
//! The domain defines what it needs from a recipe provider, and the
//! infrastructure crates provide implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait`, so the pipeline is monomorphized over the concrete provider.

use std::future::Future;

use crate::recipes::{RecipeDetail, RecipeError, RecipeId, RecipeSummary, SearchQuery};

/// Port for the external recipe provider
///
/// Implementations must:
/// - Report a missing credential through `ensure_configured` before any call
/// - Convert non-success statuses and transport failures to `RecipeError::Upstream`
/// - Never retry
pub trait RecipeProvider: Send + Sync {
    /// Check that the provider credential is provisioned
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Configuration` if the credential is absent
    fn ensure_configured(&self) -> Result<(), RecipeError>;

    /// Search for candidate recipes using the given ingredients
    ///
    /// # Arguments
    ///
    /// * `query` - Normalized ingredients and the number of candidates wanted
    ///
    /// # Returns
    ///
    /// Candidate summaries in provider ranking order, possibly empty
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Upstream` carrying the provider's message if it can
    /// be parsed, or a generic message otherwise
    fn find_by_ingredients(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<RecipeSummary>, RecipeError>> + Send;

    /// Fetch the full detail record of one recipe
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Upstream` if the lookup fails for any reason
    fn recipe_information(
        &self,
        id: RecipeId,
    ) -> impl Future<Output = Result<RecipeDetail, RecipeError>> + Send;
}
