use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::api::ErrorResponse;
use crate::repo::{self, DeleteOutcome};
use crate::validate::validate_recipe_id;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID, e.g. recipe001")
    ),
    responses(
        (status = 200, description = "Recipe deleted successfully", body = DeleteOutcome),
        (status = 400, description = "Malformed recipe ID", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(pool): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if let Err(message) = validate_recipe_id(&id) {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response();
    }

    match repo::delete_recipe(&pool, &id) {
        Ok(outcome) if outcome.success => (StatusCode::OK, Json(outcome)).into_response(),
        Ok(outcome) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: outcome.message,
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
