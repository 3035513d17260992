//! In-memory recipe provider for unit tests

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{
    DietaryRestrictions, RecipeDetail, RecipeError, RecipeId, RecipeSummary, SearchQuery,
};
use crate::ports::RecipeProvider;

pub(crate) struct FakeProvider {
    configured: bool,
    candidates: Vec<RecipeSummary>,
    details: HashMap<RecipeId, RecipeDetail>,
    failing: HashSet<RecipeId>,
    delays: HashMap<RecipeId, Duration>,
    search_error: Option<String>,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl FakeProvider {
    pub(crate) fn new() -> Self {
        Self {
            configured: true,
            candidates: Vec::new(),
            details: HashMap::new(),
            failing: HashSet::new(),
            delays: HashMap::new(),
            search_error: None,
            search_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
        }
    }

    /// Add a candidate and its detail record, flags taken from `diet`
    pub(crate) fn with_recipe(mut self, id: u64, title: &str, diet: DietaryRestrictions) -> Self {
        self.candidates.push(RecipeSummary::new(id, title));
        self.details.insert(
            RecipeId::new(id),
            RecipeDetail::new(id, title)
                .with_field("readyInMinutes", 30)
                .with_field("vegetarian", diet.vegetarian)
                .with_field("vegan", diet.vegan)
                .with_field("glutenFree", diet.gluten_free)
                .with_field("dairyFree", diet.dairy_free),
        );
        self
    }

    pub(crate) fn with_delay(mut self, id: u64, delay: Duration) -> Self {
        self.delays.insert(RecipeId::new(id), delay);
        self
    }

    pub(crate) fn with_failing_detail(mut self, id: u64) -> Self {
        self.failing.insert(RecipeId::new(id));
        self
    }

    pub(crate) fn with_search_error(mut self, msg: &str) -> Self {
        self.search_error = Some(msg.to_string());
        self
    }

    pub(crate) fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub(crate) fn candidates(&self) -> &[RecipeSummary] {
        &self.candidates
    }

    pub(crate) fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

impl RecipeProvider for FakeProvider {
    fn ensure_configured(&self) -> Result<(), RecipeError> {
        if self.configured {
            Ok(())
        } else {
            Err(RecipeError::configuration("API key not found"))
        }
    }

    fn find_by_ingredients(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<RecipeSummary>, RecipeError>> + Send {
        self.search_calls.fetch_add(1, Ordering::SeqCst);

        let outcome = match &self.search_error {
            Some(msg) => Err(RecipeError::upstream(msg.clone())),
            None => Ok(self
                .candidates
                .iter()
                .take(query.result_limit() as usize)
                .cloned()
                .collect()),
        };

        async move { outcome }
    }

    fn recipe_information(
        &self,
        id: RecipeId,
    ) -> impl Future<Output = Result<RecipeDetail, RecipeError>> + Send {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.delays.get(&id).copied();
        let outcome = if self.failing.contains(&id) {
            Err(RecipeError::upstream(format!("Failed to fetch details for recipe {id}")))
        } else {
            self.details
                .get(&id)
                .cloned()
                .ok_or_else(|| RecipeError::upstream(format!("Recipe {id} not found")))
        };

        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            outcome
        }
    }
}
