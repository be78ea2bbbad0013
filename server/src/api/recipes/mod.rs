pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

use crate::AppState;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/search", get(search::search_recipes))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        search::search_recipes,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
    ),
    components(schemas(list::ListRecipesResponse))
)]
pub struct ApiDoc;
