//! Recipe search service - Pipeline orchestration
//!
//! This module contains the retrieval pipeline shared by every hosting adapter.
//! The service coordinates the normalizer, the provider port, the detail
//! fan-out, the dietary filter and the envelope builder.

use tracing::{debug, info};

use super::{
    fanout::fetch_details, filter_recipes, query::DEFAULT_RESULT_LIMIT, DietaryRestrictions,
    ResultEnvelope, Result, SearchQuery,
};
use crate::ports::RecipeProvider;

/// Configuration for the recipe search service
#[derive(Debug, Clone)]
pub struct RecipeSearchConfig {
    /// Number of candidates requested from the search stage (default: 12)
    pub result_limit: u32,
}

impl Default for RecipeSearchConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

/// Service running the two-stage recipe retrieval pipeline
///
/// The service is stateless between calls. It is generic over any
/// `RecipeProvider`, so the hosting adapters and the tests only differ in the
/// provider they inject.
pub struct RecipeSearchService<P> {
    provider: P,
    config: RecipeSearchConfig,
}

impl<P> RecipeSearchService<P>
where
    P: RecipeProvider,
{
    /// Create a new RecipeSearchService with the given provider and configuration
    pub fn new(provider: P, config: RecipeSearchConfig) -> Self {
        Self { provider, config }
    }

    /// Create a new RecipeSearchService with default configuration
    pub fn with_provider(provider: P) -> Self {
        Self::new(provider, RecipeSearchConfig::default())
    }

    /// Search recipes by ingredients and filter them by dietary restrictions
    ///
    /// This is the main entry point of the pipeline. It:
    /// 1. Checks the provider credential
    /// 2. Validates and normalizes the ingredients
    /// 3. Parses the dietary restrictions (malformed JSON means none)
    /// 4. Searches candidates, short-circuiting when there are none
    /// 5. Fetches every candidate's detail concurrently
    /// 6. Filters the details and builds the envelope
    ///
    /// # Arguments
    ///
    /// * `raw_ingredients` - The `ingredients` parameter as received
    /// * `raw_restrictions` - The JSON-encoded `dietaryRestrictions` parameter
    ///
    /// # Errors
    ///
    /// - `RecipeError::Configuration` if the provider credential is missing
    /// - `RecipeError::MissingParameter` if ingredients are absent or blank
    /// - `RecipeError::InvalidInput` if ingredients cannot be normalized
    /// - `RecipeError::Upstream` if the search call fails
    /// - `RecipeError::PartialFailure` if any detail lookup fails
    pub async fn search(
        &self,
        raw_ingredients: Option<&str>,
        raw_restrictions: Option<&str>,
    ) -> Result<ResultEnvelope> {
        self.provider.ensure_configured()?;

        let query = SearchQuery::from_raw(raw_ingredients, self.config.result_limit)?;
        let restrictions = DietaryRestrictions::from_json(raw_restrictions);

        debug!(
            ingredients = %query.ingredients_param(),
            restrictions = ?restrictions,
            "Normalized search request"
        );

        let candidates = self.provider.find_by_ingredients(&query).await?;
        if candidates.is_empty() {
            info!(ingredients = %query.ingredients_param(), "No candidate recipes found");
            return Ok(ResultEnvelope::no_candidates());
        }

        let details = fetch_details(&self.provider, &candidates).await?;
        let filtered = filter_recipes(details, &restrictions);

        info!(
            candidates = candidates.len(),
            matched = filtered.len(),
            "Recipe search completed"
        );

        Ok(ResultEnvelope::from_filtered(filtered))
    }

    /// Get the provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get the service configuration
    pub fn config(&self) -> &RecipeSearchConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::testing::FakeProvider;
    use crate::recipes::{RecipeError, NO_DIETARY_MATCHES, NO_RECIPES_FOUND};

    fn vegetarian() -> DietaryRestrictions {
        DietaryRestrictions {
            vegetarian: true,
            ..Default::default()
        }
    }

    fn kitchen() -> FakeProvider {
        FakeProvider::new()
            .with_recipe(10, "Caprese Salad", vegetarian())
            .with_recipe(11, "Chicken Parm", DietaryRestrictions::default())
            .with_recipe(12, "Tomato Soup", vegetarian())
    }

    #[tokio::test]
    async fn test_search_without_restrictions_returns_all() {
        let service = RecipeSearchService::with_provider(kitchen());

        let envelope = service.search(Some("tomato, cheese"), None).await.unwrap();

        let titles: Vec<&str> = envelope.recipes.iter().filter_map(|r| r.title()).collect();
        assert_eq!(titles, vec!["Caprese Salad", "Chicken Parm", "Tomato Soup"]);
        assert!(envelope.message.is_none());
    }

    #[tokio::test]
    async fn test_search_filters_by_restrictions() {
        let service = RecipeSearchService::with_provider(kitchen());

        let envelope = service
            .search(Some("tomato"), Some(r#"{"vegetarian":true}"#))
            .await
            .unwrap();

        let ids: Vec<u64> = envelope
            .recipes
            .iter()
            .filter_map(|r| r.id())
            .map(|id| id.value())
            .collect();
        assert_eq!(ids, vec![10, 12]);
    }

    #[tokio::test]
    async fn test_search_no_matches_uses_dietary_message() {
        let service = RecipeSearchService::with_provider(kitchen());

        let envelope = service
            .search(Some("tomato"), Some(r#"{"vegan":true}"#))
            .await
            .unwrap();

        assert!(envelope.recipes.is_empty());
        assert_eq!(envelope.message.as_deref(), Some(NO_DIETARY_MATCHES));
    }

    #[tokio::test]
    async fn test_search_no_candidates_skips_detail_stage() {
        let provider = FakeProvider::new();
        let service = RecipeSearchService::with_provider(provider);

        let envelope = service.search(Some("dragonfruit"), None).await.unwrap();

        assert!(envelope.recipes.is_empty());
        assert_eq!(envelope.message.as_deref(), Some(NO_RECIPES_FOUND));
        assert_eq!(service.provider().search_calls(), 1);
        assert_eq!(service.provider().detail_calls(), 0);
    }

    #[tokio::test]
    async fn test_search_malformed_restrictions_means_none() {
        let service = RecipeSearchService::with_provider(kitchen());

        let envelope = service
            .search(Some("tomato"), Some("{vegetarian: yes"))
            .await
            .unwrap();

        assert_eq!(envelope.recipes.len(), 3);
    }

    #[tokio::test]
    async fn test_search_detail_failure_is_partial_failure() {
        let service = RecipeSearchService::with_provider(kitchen().with_failing_detail(11));

        let err = service.search(Some("tomato"), None).await.unwrap_err();

        assert!(matches!(err, RecipeError::PartialFailure { .. }));
        assert_eq!(err.http_status(), 500);
    }

    #[tokio::test]
    async fn test_search_upstream_failure() {
        let provider = kitchen().with_search_error("Invalid API key");
        let service = RecipeSearchService::with_provider(provider);

        let err = service.search(Some("tomato"), None).await.unwrap_err();

        assert!(matches!(err, RecipeError::Upstream(_)));
        assert_eq!(err.error_message(), "Invalid API key");
        assert_eq!(service.provider().detail_calls(), 0);
    }

    #[tokio::test]
    async fn test_search_missing_ingredients() {
        let service = RecipeSearchService::with_provider(kitchen());

        for raw in [None, Some(""), Some("  \t ")] {
            let err = service.search(raw, None).await.unwrap_err();
            assert!(matches!(err, RecipeError::MissingParameter(_)));
            assert_eq!(err.error_message(), "Missing ingredients parameter");
        }
        assert_eq!(service.provider().search_calls(), 0);
    }

    #[tokio::test]
    async fn test_search_invalid_ingredients() {
        let service = RecipeSearchService::with_provider(kitchen());

        let err = service.search(Some(",,,"), None).await.unwrap_err();

        assert!(matches!(err, RecipeError::InvalidInput(_)));
        assert_eq!(service.provider().search_calls(), 0);
    }

    #[tokio::test]
    async fn test_search_unconfigured_fails_before_any_call() {
        let service = RecipeSearchService::with_provider(kitchen().unconfigured());

        let err = service.search(Some("tomato"), None).await.unwrap_err();

        assert!(matches!(err, RecipeError::Configuration(_)));
        assert_eq!(service.provider().search_calls(), 0);
        assert_eq!(service.provider().detail_calls(), 0);
    }

    #[tokio::test]
    async fn test_search_respects_result_limit() {
        let config = RecipeSearchConfig { result_limit: 2 };
        let service = RecipeSearchService::new(kitchen(), config);

        let envelope = service.search(Some("tomato"), None).await.unwrap();

        assert_eq!(envelope.recipes.len(), 2);
        assert_eq!(service.provider().detail_calls(), 2);
    }
}
