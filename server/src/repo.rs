use diesel::prelude::*;
use diesel::r2d2::PoolError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::db::{self, DbConn, DbPool};
use crate::models::{NewRecipe, Recipe, RecipeRow};
use crate::schema::recipes;
use crate::validate::{validate, RecipeInput};

/// Everything a repository operation can fail with. A missing record is not
/// an error; lookups return `Ok(None)` and deletes report their outcome.
#[derive(Error, Debug)]
pub enum RepoError {
    /// One or more field constraints violated on create/update. The display
    /// form joins the per-constraint messages the way callers render them.
    #[error("{}", .0.join(". "))]
    Validation(Vec<String>),

    #[error("Database connection failed")]
    Connection(#[from] PoolError),

    /// Any other backend failure, re-surfaced with a per-operation message.
    #[error("{message}")]
    Database {
        message: &'static str,
        #[source]
        source: Option<diesel::result::Error>,
    },
}

impl RepoError {
    /// Wraps a backend error, logging the underlying cause at the boundary
    /// where it is caught. The message is all callers get to see.
    fn db(message: &'static str, source: diesel::result::Error) -> Self {
        tracing::error!("{message}: {source}");
        Self::Database {
            message,
            source: Some(source),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result of a delete, mirroring what the presentation layer renders.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteOutcome {
    pub success: bool,
    pub message: String,
}

/// Validates the input, allocates the next free identifier, persists, and
/// returns the stored entity.
pub fn create_recipe(pool: &DbPool, input: &RecipeInput) -> Result<Recipe, RepoError> {
    let valid = validate(input).map_err(RepoError::Validation)?;
    let mut conn = db::get_conn(pool)?;

    let id = match next_recipe_id(highest_id(&mut conn)?.as_deref()) {
        Some(id) => id,
        None => {
            tracing::error!("Recipe id space exhausted");
            return Err(RepoError::Database {
                message: "Failed to create recipe",
                source: None,
            });
        }
    };

    let ingredients: Vec<Option<String>> = valid.ingredients.into_iter().map(Some).collect();
    let steps: Vec<Option<String>> = valid.steps.into_iter().map(Some).collect();

    let new_recipe = NewRecipe {
        id: &id,
        name: &valid.name,
        description: &valid.description,
        difficulty: valid.difficulty.as_str(),
        ingredients: &ingredients,
        steps: &steps,
    };

    let row: RecipeRow = diesel::insert_into(recipes::table)
        .values(&new_recipe)
        .returning(RecipeRow::as_returning())
        .get_result(&mut conn)
        .map_err(|e| RepoError::db("Failed to create recipe", e))?;

    Ok(row.into_recipe())
}

/// Fetches one recipe by identifier; a missing record is `Ok(None)`.
pub fn get_recipe(pool: &DbPool, id: &str) -> Result<Option<Recipe>, RepoError> {
    let mut conn = db::get_conn(pool)?;

    match recipes::table
        .find(id)
        .select(RecipeRow::as_select())
        .first(&mut conn)
    {
        Ok(row) => Ok(Some(RecipeRow::into_recipe(row))),
        Err(diesel::NotFound) => Ok(None),
        Err(e) => Err(RepoError::db("Failed to fetch recipe", e)),
    }
}

/// Fetches every recipe, ordered by identifier. Ids are allocated in
/// increasing order, so this is creation order and stable across calls.
pub fn get_recipes(pool: &DbPool) -> Result<Vec<Recipe>, RepoError> {
    let mut conn = db::get_conn(pool)?;

    let rows: Vec<RecipeRow> = recipes::table
        .order(recipes::id.asc())
        .select(RecipeRow::as_select())
        .load(&mut conn)
        .map_err(|e| RepoError::db("Failed to fetch recipes", e))?;

    Ok(rows.into_iter().map(RecipeRow::into_recipe).collect())
}

/// Replaces all writable fields of the recipe with the given identifier,
/// re-validating the new values. `Ok(None)` when no such recipe exists, in
/// which case nothing is written. `updated_at` is advanced by the backend.
pub fn edit_recipe(
    pool: &DbPool,
    id: &str,
    input: &RecipeInput,
) -> Result<Option<Recipe>, RepoError> {
    let valid = validate(input).map_err(RepoError::Validation)?;
    let mut conn = db::get_conn(pool)?;

    let ingredients: Vec<Option<String>> = valid.ingredients.into_iter().map(Some).collect();
    let steps: Vec<Option<String>> = valid.steps.into_iter().map(Some).collect();

    match diesel::update(recipes::table.find(id))
        .set((
            recipes::name.eq(valid.name.as_str()),
            recipes::description.eq(valid.description.as_str()),
            recipes::difficulty.eq(valid.difficulty.as_str()),
            recipes::ingredients.eq(ingredients.as_slice()),
            recipes::steps.eq(steps.as_slice()),
        ))
        .returning(RecipeRow::as_returning())
        .get_result(&mut conn)
    {
        Ok(row) => Ok(Some(RecipeRow::into_recipe(row))),
        Err(diesel::NotFound) => Ok(None),
        Err(e) => Err(RepoError::db("Failed to update recipe", e)),
    }
}

/// Removes the recipe with the given identifier, reporting the outcome the
/// way the presentation layer renders it.
pub fn delete_recipe(pool: &DbPool, id: &str) -> Result<DeleteOutcome, RepoError> {
    let mut conn = db::get_conn(pool)?;

    let deleted = diesel::delete(recipes::table.find(id))
        .execute(&mut conn)
        .map_err(|e| RepoError::db("Failed to delete recipe", e))?;

    if deleted == 0 {
        return Ok(DeleteOutcome {
            success: false,
            message: "Recipe not found".to_string(),
        });
    }

    Ok(DeleteOutcome {
        success: true,
        message: "Recipe deleted successfully".to_string(),
    })
}

fn highest_id(conn: &mut DbConn) -> Result<Option<String>, RepoError> {
    // Lexicographic max equals numeric max for the fixed-width id format.
    recipes::table
        .select(recipes::id)
        .order(recipes::id.desc())
        .first::<String>(conn)
        .optional()
        .map_err(|e| RepoError::db("Failed to create recipe", e))
}

/// Next identifier after the current numeric maximum; `None` once the
/// three-digit space is exhausted. A concurrent duplicate allocation is
/// caught by the primary key and surfaces as a create failure.
fn next_recipe_id(highest: Option<&str>) -> Option<String> {
    let next = match highest {
        None => 1,
        Some(id) => id.strip_prefix("recipe")?.parse::<u32>().ok()? + 1,
    };

    if next > 999 {
        return None;
    }

    Some(format!("recipe{next:03}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_id_is_recipe001() {
        assert_eq!(next_recipe_id(None).as_deref(), Some("recipe001"));
    }

    #[test]
    fn test_id_continues_from_maximum() {
        assert_eq!(next_recipe_id(Some("recipe041")).as_deref(), Some("recipe042"));
        assert_eq!(next_recipe_id(Some("recipe099")).as_deref(), Some("recipe100"));
        assert_eq!(next_recipe_id(Some("recipe998")).as_deref(), Some("recipe999"));
    }

    #[test]
    fn test_id_space_exhaustion() {
        assert_eq!(next_recipe_id(Some("recipe999")), None);
    }

    #[test]
    fn test_validation_error_joins_messages() {
        let err = RepoError::Validation(vec![
            "Name must be at least 3 characters long".to_string(),
            "Please provide ingredients".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Name must be at least 3 characters long. Please provide ingredients"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_database_error_shows_operation_message() {
        let err = RepoError::Database {
            message: "Failed to fetch recipes",
            source: None,
        };
        assert_eq!(err.to_string(), "Failed to fetch recipes");
        assert!(!err.is_validation());
    }
}
