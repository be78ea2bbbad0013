use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::api::ErrorResponse;
use crate::models::Recipe;
use crate::repo;
use crate::validate::{validate_recipe_id, RecipeInput};
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID, e.g. recipe001")
    ),
    request_body = RecipeInput,
    responses(
        (status = 200, description = "Recipe updated successfully", body = Recipe),
        (status = 400, description = "Malformed ID or field constraints violated", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(pool): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RecipeInput>,
) -> impl IntoResponse {
    if let Err(message) = validate_recipe_id(&id) {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response();
    }

    match repo::edit_recipe(&pool, &id, &request) {
        Ok(Some(recipe)) => (StatusCode::OK, Json(recipe)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
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
