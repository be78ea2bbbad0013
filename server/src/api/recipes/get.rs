use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::api::ErrorResponse;
use crate::models::Recipe;
use crate::repo;
use crate::validate::validate_recipe_id;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID, e.g. recipe001")
    ),
    responses(
        (status = 200, description = "Recipe details", body = Recipe),
        (status = 400, description = "Malformed recipe ID", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(pool): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if let Err(message) = validate_recipe_id(&id) {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response();
    }

    match repo::get_recipe(&pool, &id) {
        Ok(Some(recipe)) => (StatusCode::OK, Json(recipe)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
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
