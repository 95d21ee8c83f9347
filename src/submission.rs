use serde::Deserialize;

use crate::error::CatalogError;
use crate::model::CategoryId;

pub const MAX_NAME_LEN: usize = 255;
pub const MAX_SERVINGS: u32 = 50;
pub const MAX_COOKING_TIME: u32 = 360;
pub const MAX_STEPS: usize = 2000;
pub const MAX_INGREDIENTS: usize = 2000;

/// A recipe as submitted by a user, before it is stored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    pub number_of_servings: u32,
    pub cooking_time: u32,
    pub how_to_cook: Vec<String>,
    pub category_id: CategoryId,
    pub list_of_ingredients: Vec<NewIngredient>,
    /// Image reference handed back by the upload service
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewIngredient {
    pub name: String,
    pub quantity: f64,
    pub measure: String,
}

impl NewRecipe {
    /// Check field limits. Category and owner existence are checked by the catalog.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return invalid("name is required");
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return invalid(format!("name may not exceed {} characters", MAX_NAME_LEN));
        }
        if self.number_of_servings > MAX_SERVINGS {
            return invalid(format!(
                "number_of_servings may not exceed {}",
                MAX_SERVINGS
            ));
        }
        if self.cooking_time > MAX_COOKING_TIME {
            return invalid(format!("cooking_time may not exceed {}", MAX_COOKING_TIME));
        }
        if self.how_to_cook.is_empty() {
            return invalid("how_to_cook is required");
        }
        if self.how_to_cook.len() > MAX_STEPS {
            return invalid(format!("how_to_cook may not have more than {} steps", MAX_STEPS));
        }
        if self.category_id == 0 {
            return invalid("category_id is required");
        }
        if self.list_of_ingredients.is_empty() {
            return invalid("list_of_ingredients is required");
        }
        if self.list_of_ingredients.len() > MAX_INGREDIENTS {
            return invalid(format!(
                "list_of_ingredients may not have more than {} items",
                MAX_INGREDIENTS
            ));
        }
        if let Some(pos) = self
            .list_of_ingredients
            .iter()
            .position(|i| i.name.trim().is_empty())
        {
            return invalid(format!("ingredient {} has no name", pos + 1));
        }
        if self
            .list_of_ingredients
            .iter()
            .any(|i| !i.quantity.is_finite() || i.quantity < 0.0)
        {
            return invalid("ingredient quantities must be non-negative numbers");
        }
        if self.image.trim().is_empty() {
            return invalid("image is required");
        }
        Ok(())
    }
}

fn invalid<T>(message: impl Into<String>) -> Result<T, CatalogError> {
    Err(CatalogError::Validation(message.into()))
}
