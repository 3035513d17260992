//! Concurrent detail lookups for the search candidates

use futures_util::future::try_join_all;
use tracing::{debug, error};

use super::{RecipeDetail, RecipeError, RecipeSummary, Result};
use crate::ports::RecipeProvider;

/// Fetch the detail record of every candidate concurrently
///
/// All lookups are polled together on the calling task. The first failure
/// drops the lookups still in flight, and no partial list is returned. The
/// output follows candidate order, not completion order.
///
/// # Errors
///
/// Returns `RecipeError::PartialFailure` naming the first recipe whose lookup
/// failed
pub async fn fetch_details<P>(
    provider: &P,
    candidates: &[RecipeSummary],
) -> Result<Vec<RecipeDetail>>
where
    P: RecipeProvider,
{
    debug!(count = candidates.len(), "Fetching recipe details");

    let lookups = candidates.iter().map(|candidate| {
        let id = candidate.id;
        async move {
            provider.recipe_information(id).await.map_err(|err| {
                error!(recipe_id = %id, error = %err, "Recipe detail lookup failed");
                RecipeError::partial_failure(id, err.to_string())
            })
        }
    });

    try_join_all(lookups).await
}
