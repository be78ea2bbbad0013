use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::recipes::list::ListRecipesResponse;
use crate::api::ErrorResponse;
use crate::repo;
use crate::search::filter_recipes;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchRecipesParams {
    /// Free-text term matched case-insensitively against name, description,
    /// ingredients, and steps. Empty or missing returns everything.
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/search",
    tag = "recipes",
    params(SearchRecipesParams),
    responses(
        (status = 200, description = "Recipes matching the term, in creation order", body = ListRecipesResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    )
)]
pub async fn search_recipes(
    State(pool): State<AppState>,
    Query(params): Query<SearchRecipesParams>,
) -> impl IntoResponse {
    let recipes = match repo::get_recipes(&pool) {
        Ok(recipes) => recipes,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    };

    let term = params.q.unwrap_or_default();
    let recipes = filter_recipes(&recipes, &term);

    (StatusCode::OK, Json(ListRecipesResponse { recipes })).into_response()
}
