pub mod legacy;
pub mod recipes;

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::models::{Difficulty, Recipe};
use crate::repo::DeleteOutcome;
use crate::validate::RecipeInput;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components
    #[derive(OpenApi)]
    #[openapi(components(schemas(
        ErrorResponse,
        Recipe,
        RecipeInput,
        Difficulty,
        DeleteOutcome
    )))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    // Merge in each module's spec
    let modules: Vec<utoipa::openapi::OpenApi> =
        vec![recipes::ApiDoc::openapi(), legacy::ApiDoc::openapi()];

    for module_spec in modules {
        // Merge paths
        spec.paths.paths.extend(module_spec.paths.paths);

        // Merge components (schemas)
        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
