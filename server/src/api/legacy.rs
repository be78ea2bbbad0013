//! Older `/recipes` resource surface kept for existing clients. Unlike the
//! `/api/recipes` routes it returns a bare array and reports every failure,
//! validation included, as a 500. Unrouted methods get axum's 405.

use axum::routing::get;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json, Router};
use utoipa::OpenApi;

use crate::api::ErrorResponse;
use crate::models::Recipe;
use crate::repo;
use crate::validate::RecipeInput;
use crate::AppState;

/// Returns the router for the legacy /recipes resource
pub fn router() -> Router<AppState> {
    Router::new().route("/recipes", get(legacy_list).post(legacy_create))
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "legacy",
    responses(
        (status = 200, description = "Every recipe as a bare array", body = [Recipe]),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    )
)]
pub async fn legacy_list(State(pool): State<AppState>) -> impl IntoResponse {
    match repo::get_recipes(&pool) {
        Ok(recipes) => (StatusCode::OK, Json(recipes)).into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Error fetching recipes".to_string(),
            }),
        )
            .into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "legacy",
    request_body = RecipeInput,
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 500, description = "Invalid body or backend failure", body = ErrorResponse)
    )
)]
pub async fn legacy_create(
    State(pool): State<AppState>,
    Json(request): Json<RecipeInput>,
) -> impl IntoResponse {
    match repo::create_recipe(&pool, &request) {
        Ok(recipe) => (StatusCode::CREATED, Json(recipe)).into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Error creating recipe".to_string(),
            }),
        )
            .into_response(),
    }
}

#[derive(OpenApi)]
#[openapi(paths(legacy_list, legacy_create))]
pub struct ApiDoc;
