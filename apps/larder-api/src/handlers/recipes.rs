//! Recipe search handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use larder_domain::RecipeError;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    dto::recipes::{ErrorResponse, RecipeQuery, RecipesResponse},
    AppState,
};

/// Search recipes by ingredients, filtered by dietary restrictions
#[utoipa::path(
    get,
    path = "/api/recipes",
    params(RecipeQuery),
    responses(
        (status = 200, description = "Search completed, possibly with no matches",
            body = RecipesResponse),
        (status = 400, description = "Missing or invalid ingredients", body = ErrorResponse),
        (status = 405, description = "Method other than GET", body = ErrorResponse),
        (status = 500, description = "Server misconfigured or provider failure",
            body = ErrorResponse)
    ),
    tag = "recipes"
)]
#[instrument(skip(state, params), fields(request_id = %Uuid::now_v7()))]
pub async fn recipes_handler(
    State(state): State<AppState>,
    params: Result<Query<RecipeQuery>, QueryRejection>,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            return error_response(&RecipeError::invalid_input(rejection.body_text()));
        }
    };

    info!(
        ingredients = ?params.ingredients,
        dietary_restrictions = ?params.dietary_restrictions,
        "Received recipe search request"
    );

    match state
        .recipe_service
        .search(
            params.ingredients.as_deref(),
            params.dietary_restrictions.as_deref(),
        )
        .await
    {
        Ok(envelope) => {
            info!(count = envelope.recipes.len(), "Recipe search succeeded");
            (StatusCode::OK, Json(RecipesResponse::from(envelope))).into_response()
        }
        Err(err) => error_response(&err),
    }
}

/// Log a domain error and render it as a JSON error response
pub fn error_response(err: &RecipeError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        error!(error = %err, status = %status, "Recipe search failed");
    } else {
        warn!(error = %err, status = %status, "Rejected recipe search request");
    }

    (status, Json(ErrorResponse::from(err.to_body()))).into_response()
}
