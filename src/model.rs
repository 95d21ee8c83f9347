use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type RecipeId = u64;
pub type IngredientId = u64;
pub type CategoryId = u64;
pub type UserId = u64;

/// A dish record with its steps and attached ingredients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    /// Public URL or object-store key of the recipe photo
    #[serde(default)]
    pub image: String,
    pub number_of_servings: u32,
    /// Minutes
    pub cooking_time: u32,
    pub how_to_cook: Vec<String>,
    pub category_id: CategoryId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Iterate over the stored (lowercased) names of the attached ingredients
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }
}

/// An ingredient shared across recipes; `name` is always trimmed and lowercased
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
}

impl Ingredient {
    /// The canonical form ingredient names are stored under
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }
}

/// An ingredient attached to a recipe, with its per-recipe quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub ingredient_id: IngredientId,
    pub name: String,
    pub quantity: f64,
    /// Unit of the quantity, lowercased ("g", "cup", "unit")
    pub measure: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}
