use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::api::ErrorResponse;
use crate::models::Recipe;
use crate::repo;
use crate::validate::RecipeInput;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = RecipeInput,
    responses(
        (status = 201, description = "Recipe created successfully", body = Recipe),
        (status = 400, description = "One or more field constraints violated", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(pool): State<AppState>,
    Json(request): Json<RecipeInput>,
) -> impl IntoResponse {
    match repo::create_recipe(&pool, &request) {
        Ok(recipe) => (StatusCode::CREATED, Json(recipe)).into_response(),
        Err(e) if e.is_validation() => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
