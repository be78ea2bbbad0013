use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How involved a recipe is to cook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Strict parse; difficulty levels are case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Self::Easy),
            "Medium" => Some(Self::Medium),
            "Hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// The recipe entity as the rest of the application sees it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw `recipes` row. Array columns come back with nullable elements, and
/// `difficulty` as the stored string; [`RecipeRow::into_recipe`] is the only
/// place the translation happens.
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub ingredients: Vec<Option<String>>,
    pub steps: Vec<Option<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeRow {
    pub fn into_recipe(self) -> Recipe {
        // An unknown stored difficulty cannot pass the write-time checks;
        // treat it as the middle of the scale rather than failing the read.
        let difficulty = Difficulty::parse(&self.difficulty).unwrap_or(Difficulty::Medium);

        Recipe {
            id: self.id,
            name: self.name,
            description: self.description,
            difficulty,
            ingredients: self.ingredients.into_iter().flatten().collect(),
            steps: self.steps.into_iter().flatten().collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub difficulty: &'a str,
    pub ingredients: &'a [Option<String>],
    pub steps: &'a [Option<String>],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::parse(d.as_str()), Some(d));
        }
    }

    #[test]
    fn test_difficulty_rejects_other_casings() {
        assert_eq!(Difficulty::parse("easy"), None);
        assert_eq!(Difficulty::parse("HARD"), None);
        assert_eq!(Difficulty::parse("Trivial"), None);
    }

    #[test]
    fn test_row_mapping_flattens_arrays() {
        let row = RecipeRow {
            id: "recipe001".to_string(),
            name: "Pasta Bake".to_string(),
            description: "A cheesy baked pasta".to_string(),
            difficulty: "Easy".to_string(),
            ingredients: vec![Some("pasta".to_string()), None, Some("cheese".to_string())],
            steps: vec![Some("boil pasta thoroughly".to_string())],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let recipe = row.into_recipe();
        assert_eq!(recipe.ingredients, vec!["pasta", "cheese"]);
        assert_eq!(recipe.steps, vec!["boil pasta thoroughly"]);
        assert_eq!(recipe.difficulty, Difficulty::Easy);
    }
}
