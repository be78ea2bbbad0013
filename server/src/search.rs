use crate::models::Recipe;

/// Narrows an already-loaded recipe list to those matching a free-text term.
///
/// The term is trimmed and lowercased; when that leaves nothing, the input
/// comes back unchanged. Otherwise a recipe matches when the lowercased
/// concatenation of its name, description, ingredients, and steps contains
/// the folded term as a substring. Input order is preserved. No ranking, no
/// tokenization.
pub fn filter_recipes(recipes: &[Recipe], term: &str) -> Vec<Recipe> {
    let term = term.trim().to_lowercase();

    if term.is_empty() {
        return recipes.to_vec();
    }

    recipes
        .iter()
        .filter(|recipe| {
            let mut searchable = vec![recipe.name.as_str(), recipe.description.as_str()];
            searchable.extend(recipe.ingredients.iter().map(String::as_str));
            searchable.extend(recipe.steps.iter().map(String::as_str));

            searchable.join(" ").to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use chrono::Utc;

    fn recipe(id: &str, name: &str, description: &str, ingredients: &[&str], steps: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            difficulty: Difficulty::Easy,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe(
                "recipe001",
                "Pasta Bake",
                "cheesy",
                &["pasta", "cheese"],
                &["boil pasta thoroughly"],
            ),
            recipe(
                "recipe002",
                "Miso Soup",
                "light and savory",
                &["miso paste", "tofu"],
                &["simmer the dashi gently"],
            ),
            recipe(
                "recipe003",
                "Flatbread",
                "quick weeknight side",
                &["flour", "yeast"],
                &["knead the dough until smooth"],
            ),
        ]
    }

    #[test]
    fn test_empty_term_is_identity() {
        let recipes = sample();
        assert_eq!(filter_recipes(&recipes, ""), recipes);
    }

    #[test]
    fn test_whitespace_term_is_identity() {
        let recipes = sample();
        assert_eq!(filter_recipes(&recipes, "   "), recipes);
    }

    #[test]
    fn test_case_insensitive_match() {
        let recipes = sample();
        let found = filter_recipes(&recipes, "PASTA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "recipe001");
    }

    #[test]
    fn test_matches_description_and_steps() {
        let recipes = sample();
        assert_eq!(filter_recipes(&recipes, "savory")[0].id, "recipe002");
        assert_eq!(filter_recipes(&recipes, "knead")[0].id, "recipe003");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let recipes = sample();
        assert!(filter_recipes(&recipes, "nonexistentterm12345").is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let recipes = sample();
        // "the" appears in steps of recipes 002 and 003
        let found = filter_recipes(&recipes, "the");
        let ids: Vec<&str> = found.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["recipe002", "recipe003"]);
    }

    #[test]
    fn test_term_is_trimmed_before_matching() {
        let recipes = sample();
        let found = filter_recipes(&recipes, "  tofu  ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "recipe002");
    }
}
