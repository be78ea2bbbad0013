use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::Difficulty;

static RECIPE_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^recipe\d{3}$").expect("recipe id pattern is valid"));

/// The writable fields of a recipe, as submitted by a client. Difficulty
/// arrives as a plain string so that an unknown level produces a field
/// message instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecipeInput {
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// A validated, trimmed recipe body ready to persist.
#[derive(Debug, Clone)]
pub struct ValidRecipe {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Checks every field constraint against the trimmed input, collecting one
/// message per violated constraint. The trimmed values are what callers
/// persist.
pub fn validate(input: &RecipeInput) -> Result<ValidRecipe, Vec<String>> {
    let mut errors = Vec::new();

    let name = input.name.trim().to_string();
    if name.is_empty() {
        errors.push("Please provide a recipe name".to_string());
    } else if name.chars().count() < 3 {
        errors.push("Name must be at least 3 characters long".to_string());
    }

    let description = input.description.trim().to_string();
    if description.is_empty() {
        errors.push("Please provide a description".to_string());
    } else if description.chars().count() < 10 {
        errors.push("Description must be at least 10 characters long".to_string());
    }

    let difficulty_raw = input.difficulty.trim();
    let difficulty = if difficulty_raw.is_empty() {
        errors.push("Please specify the difficulty level".to_string());
        None
    } else {
        let parsed = Difficulty::parse(difficulty_raw);
        if parsed.is_none() {
            errors.push(format!("{difficulty_raw} is not a valid difficulty level"));
        }
        parsed
    };

    let ingredients: Vec<String> = input
        .ingredients
        .iter()
        .map(|i| i.trim().to_string())
        .collect();
    if ingredients.is_empty() || ingredients.iter().any(String::is_empty) {
        errors.push("Please provide ingredients".to_string());
    } else if ingredients.iter().any(|i| i.chars().count() < 3) {
        errors.push("Each ingredient must be at least 3 characters long".to_string());
    }

    let steps: Vec<String> = input.steps.iter().map(|s| s.trim().to_string()).collect();
    if steps.is_empty() || steps.iter().any(String::is_empty) {
        errors.push("Please provide cooking steps".to_string());
    } else if steps.iter().any(|s| s.chars().count() < 10) {
        errors.push("Each step must be at least 10 characters long".to_string());
    }

    // A missing difficulty always records a message, so the fallthrough
    // never returns an empty error list.
    match difficulty {
        Some(difficulty) if errors.is_empty() => Ok(ValidRecipe {
            name,
            description,
            difficulty,
            ingredients,
            steps,
        }),
        _ => Err(errors),
    }
}

/// Validates an identifier taken from outside before it reaches a query.
pub fn validate_recipe_id(id: &str) -> Result<(), String> {
    if RECIPE_ID_PATTERN.is_match(id) {
        Ok(())
    } else {
        Err(format!(
            "{id} is not a valid recipe ID! Format should be 'recipe' followed by 3 digits"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RecipeInput {
        RecipeInput {
            name: "Pasta Bake".to_string(),
            description: "A cheesy baked pasta dish".to_string(),
            difficulty: "Easy".to_string(),
            ingredients: vec!["pasta".to_string(), "cheese".to_string()],
            steps: vec!["Boil the pasta thoroughly".to_string()],
        }
    }

    #[test]
    fn test_valid_input_passes_trimmed() {
        let mut input = valid_input();
        input.name = "  Pasta Bake  ".to_string();
        input.ingredients = vec!["  pasta ".to_string(), "cheese".to_string()];

        let valid = validate(&input).unwrap();
        assert_eq!(valid.name, "Pasta Bake");
        assert_eq!(valid.ingredients, vec!["pasta", "cheese"]);
        assert_eq!(valid.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_short_name_rejected() {
        let mut input = valid_input();
        input.name = "Pi".to_string();

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec!["Name must be at least 3 characters long"]);
    }

    #[test]
    fn test_empty_name_gets_required_message() {
        let mut input = valid_input();
        input.name = "   ".to_string();

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec!["Please provide a recipe name"]);
    }

    #[test]
    fn test_short_description_rejected() {
        let mut input = valid_input();
        input.description = "too short".to_string();

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec!["Description must be at least 10 characters long"]);
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let mut input = valid_input();
        input.difficulty = "Impossible".to_string();

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec!["Impossible is not a valid difficulty level"]);
    }

    #[test]
    fn test_no_ingredients_rejected() {
        let mut input = valid_input();
        input.ingredients = vec![];

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec!["Please provide ingredients"]);
    }

    #[test]
    fn test_short_ingredient_rejected() {
        let mut input = valid_input();
        input.ingredients = vec!["ok".to_string(), "pasta".to_string()];

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec!["Each ingredient must be at least 3 characters long"]);
    }

    #[test]
    fn test_short_step_rejected() {
        let mut input = valid_input();
        input.steps = vec!["Stir".to_string()];

        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec!["Each step must be at least 10 characters long"]);
    }

    #[test]
    fn test_violations_collected_in_field_order() {
        let input = RecipeInput {
            name: "Pi".to_string(),
            description: "short".to_string(),
            difficulty: "Brutal".to_string(),
            ingredients: vec![],
            steps: vec!["Stir".to_string()],
        };

        let errors = validate(&input).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Name must be at least 3 characters long",
                "Description must be at least 10 characters long",
                "Brutal is not a valid difficulty level",
                "Please provide ingredients",
                "Each step must be at least 10 characters long",
            ]
        );
    }

    #[test]
    fn test_recipe_id_format() {
        assert!(validate_recipe_id("recipe001").is_ok());
        assert!(validate_recipe_id("recipe999").is_ok());

        for bad in ["recipe1", "recipe0001", "Recipe001", "recipe01a", "001", ""] {
            assert!(validate_recipe_id(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_recipe_id_message_wording() {
        let err = validate_recipe_id("soup42").unwrap_err();
        assert_eq!(
            err,
            "soup42 is not a valid recipe ID! Format should be 'recipe' followed by 3 digits"
        );
    }
}
