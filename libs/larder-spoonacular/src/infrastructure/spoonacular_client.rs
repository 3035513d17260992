//! Spoonacular Recipe Provider Implementation
//!
//! This module implements the `RecipeProvider` trait on top of the Spoonacular
//! REST API. It issues the HTTP calls and converts failures to domain errors.

use larder_domain::{
    ports::RecipeProvider,
    recipes::{RecipeDetail, RecipeError, RecipeId, RecipeSummary, SearchQuery},
};
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

use crate::{config::SpoonacularConfig, error::SpoonacularError};

/// Generic message used when a failed search carries no readable reason
const SEARCH_FAILED: &str = "Failed to fetch recipes";

/// Spoonacular-based implementation of the RecipeProvider port
///
/// ## Endpoints
///
/// - `GET {base}/recipes/findByIngredients?apiKey&ingredients&number`
/// - `GET {base}/recipes/{id}/information?apiKey`
///
/// ## Error Handling
///
/// Non-success statuses, transport failures and unreadable bodies all become
/// `RecipeError::Upstream`. Request URLs are stripped from transport errors so
/// the API key never reaches a log line or a response body.
#[derive(Clone)]
pub struct SpoonacularClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Error payload returned by Spoonacular on failure
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: Option<String>,
}

impl SpoonacularClient {
    /// Create a new Spoonacular client
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use larder_spoonacular::{SpoonacularClient, SpoonacularConfig};
    ///
    /// let config = SpoonacularConfig::default().with_api_key("my-key");
    /// let client = SpoonacularClient::new(config).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `SpoonacularError` if the base URL is blank or the HTTP client
    /// cannot be built
    pub fn new(config: SpoonacularConfig) -> Result<Self, SpoonacularError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(SpoonacularError::invalid_config("base URL is empty"));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("larder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(base_url = %base_url, timeout = ?config.timeout, "Initializing SpoonacularClient");

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Get the API root
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self) -> String {
        format!("{}/recipes/findByIngredients", self.base_url)
    }

    fn information_url(&self, id: RecipeId) -> String {
        format!("{}/recipes/{}/information", self.base_url, id)
    }

    fn api_key(&self) -> Result<String, RecipeError> {
        self.api_key
            .clone()
            .ok_or_else(|| RecipeError::configuration("SPOONACULAR_API_KEY is not set"))
    }
}

/// Pull the `message` field out of a Spoonacular error payload
fn upstream_message(body: &str) -> Option<String> {
    serde_json::from_str::<UpstreamErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|msg| !msg.trim().is_empty())
}

impl RecipeProvider for SpoonacularClient {
    fn ensure_configured(&self) -> Result<(), RecipeError> {
        self.api_key().map(|_| ())
    }

    #[instrument(
        skip(self, query),
        fields(ingredients = %query.ingredients_param(), number = query.result_limit())
    )]
    fn find_by_ingredients(
        &self,
        query: &SearchQuery,
    ) -> impl std::future::Future<Output = Result<Vec<RecipeSummary>, RecipeError>> + Send {
        let http = self.http.clone();
        let url = self.search_url();
        let api_key = self.api_key();
        let ingredients = query.ingredients_param();
        let number = query.result_limit().to_string();

        async move {
            let api_key = api_key?;
            debug!(url = %url, "Searching recipes by ingredients");

            let response = http
                .get(&url)
                .query(&[
                    ("apiKey", api_key.as_str()),
                    ("ingredients", ingredients.as_str()),
                    ("number", number.as_str()),
                ])
                .send()
                .await
                .map_err(|err| {
                    let err = err.without_url();
                    error!(error = %err, "Recipe search request failed");
                    RecipeError::upstream(format!("{SEARCH_FAILED}: {err}"))
                })?;

            let status = response.status();
            let body = response.text().await.map_err(|err| {
                let err = err.without_url();
                error!(error = %err, "Failed to read recipe search response");
                RecipeError::upstream(format!("{SEARCH_FAILED}: {err}"))
            })?;

            if !status.is_success() {
                let message = upstream_message(&body).unwrap_or_else(|| SEARCH_FAILED.to_string());
                warn!(status = %status, message = %message, "Recipe search rejected by provider");
                return Err(RecipeError::upstream(message));
            }

            let candidates: Vec<RecipeSummary> = serde_json::from_str(&body).map_err(|err| {
                error!(error = %err, "Unexpected recipe search payload");
                RecipeError::upstream(format!("{SEARCH_FAILED}: unexpected response ({err})"))
            })?;

            info!(count = candidates.len(), "Recipe search returned candidates");
            Ok(candidates)
        }
    }

    #[instrument(skip(self), fields(recipe_id = %id))]
    fn recipe_information(
        &self,
        id: RecipeId,
    ) -> impl std::future::Future<Output = Result<RecipeDetail, RecipeError>> + Send {
        let http = self.http.clone();
        let url = self.information_url(id);
        let api_key = self.api_key();

        async move {
            let api_key = api_key?;
            debug!(url = %url, "Fetching recipe information");

            let response = http
                .get(&url)
                .query(&[("apiKey", api_key.as_str())])
                .send()
                .await
                .map_err(|err| {
                    let err = err.without_url();
                    warn!(recipe_id = %id, error = %err, "Recipe information request failed");
                    RecipeError::upstream(format!("Failed to fetch details for recipe {id}: {err}"))
                })?;

            let status = response.status();
            if !status.is_success() {
                warn!(recipe_id = %id, status = %status, "Recipe information rejected by provider");
                return Err(RecipeError::upstream(format!(
                    "Failed to fetch details for recipe {id}"
                )));
            }

            response.json::<RecipeDetail>().await.map_err(|err| {
                let err = err.without_url();
                warn!(recipe_id = %id, error = %err, "Unexpected recipe information payload");
                RecipeError::upstream(format!("Failed to read details for recipe {id}: {err}"))
            })
        }
    }
}
