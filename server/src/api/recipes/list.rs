use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::models::Recipe;
use crate::repo;
use crate::AppState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "Every recipe, in creation order", body = ListRecipesResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    )
)]
pub async fn list_recipes(State(pool): State<AppState>) -> impl IntoResponse {
    match repo::get_recipes(&pool) {
        Ok(recipes) => (StatusCode::OK, Json(ListRecipesResponse { recipes })).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
