use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};

use super::{CatalogFile, RecipeSource};
use crate::error::CatalogError;
use crate::model::{
    Category, CategoryId, Ingredient, IngredientId, Recipe, RecipeId, RecipeIngredient, User,
    UserId,
};
use crate::pipelines::TimeAndCategoryFilter;
use crate::submission::NewRecipe;

#[derive(Debug, Default)]
struct CatalogState {
    recipes: BTreeMap<RecipeId, Recipe>,
    ingredients: Vec<Ingredient>,
    ingredient_ids: HashMap<String, IngredientId>,
    categories: BTreeMap<CategoryId, Category>,
    users: BTreeMap<UserId, User>,
    next_recipe_id: RecipeId,
    next_ingredient_id: IngredientId,
}

impl CatalogState {
    fn find_or_create_ingredient(&mut self, name: &str) -> Ingredient {
        let name = Ingredient::normalize_name(name);
        if let Some(&id) = self.ingredient_ids.get(&name) {
            return Ingredient { id, name };
        }
        self.next_ingredient_id += 1;
        let ingredient = Ingredient {
            id: self.next_ingredient_id,
            name,
        };
        self.ingredient_ids.insert(ingredient.name.clone(), ingredient.id);
        self.ingredients.push(ingredient.clone());
        ingredient
    }

    /// Register an ingredient attached to a loaded recipe.
    ///
    /// Name variants resolve to the record already holding that name. An id
    /// already owned by a different name is replaced with a fresh one, so
    /// ids stay unique across the table.
    fn adopt_ingredient(
        &mut self,
        attached: &mut RecipeIngredient,
        taken: &mut HashSet<IngredientId>,
    ) {
        attached.name = Ingredient::normalize_name(&attached.name);
        if let Some(&id) = self.ingredient_ids.get(&attached.name) {
            attached.ingredient_id = id;
            return;
        }
        if !taken.insert(attached.ingredient_id) {
            self.next_ingredient_id += 1;
            attached.ingredient_id = self.next_ingredient_id;
            taken.insert(attached.ingredient_id);
        }
        self.ingredient_ids
            .insert(attached.name.clone(), attached.ingredient_id);
        self.ingredients.push(Ingredient {
            id: attached.ingredient_id,
            name: attached.name.clone(),
        });
    }
}

/// Thread-safe in-memory recipe catalog.
///
/// Holds categories, users, the shared ingredient table and the recipes
/// themselves. Recipes are kept ordered by id.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog around recipes loaded from elsewhere.
    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        Self::from_catalog(CatalogFile {
            recipes: recipes.into_iter().collect(),
            ..Default::default()
        })
    }

    /// Build a catalog from the contents of a catalog file.
    ///
    /// Categories, owners and ingredients referenced by the recipes are
    /// registered even when the file does not list them, so later
    /// submissions can resolve against them.
    pub fn from_catalog(file: CatalogFile) -> Self {
        let mut state = CatalogState::default();
        for category in file.categories {
            state.categories.insert(category.id, category);
        }
        for user in file.users {
            state.users.insert(user.id, user);
        }
        // Fresh ids start above every id the file uses
        state.next_ingredient_id = file
            .recipes
            .iter()
            .flat_map(|r| r.ingredients.iter().map(|i| i.ingredient_id))
            .max()
            .unwrap_or(0);
        let mut taken = HashSet::new();

        for mut recipe in file.recipes {
            state
                .categories
                .entry(recipe.category_id)
                .or_insert_with(|| Category {
                    id: recipe.category_id,
                    name: format!("category-{}", recipe.category_id),
                });
            state.users.entry(recipe.user_id).or_insert_with(|| User {
                id: recipe.user_id,
                name: format!("user-{}", recipe.user_id),
            });
            for attached in &mut recipe.ingredients {
                state.adopt_ingredient(attached, &mut taken);
            }
            state.next_recipe_id = state.next_recipe_id.max(recipe.id);
            state.recipes.insert(recipe.id, recipe);
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// Copy the catalog out in catalog-file form
    pub fn snapshot(&self) -> CatalogFile {
        let state = self.read();
        CatalogFile {
            categories: state.categories.values().cloned().collect(),
            users: state.users.values().cloned().collect(),
            recipes: state.recipes.values().cloned().collect(),
        }
    }

    // Poisoning is ignored. A panic inside `submit` can at worst leave
    // ingredient rows that no recipe references yet.
    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn add_category(&self, name: impl Into<String>) -> CategoryId {
        let mut state = self.write();
        let id = state.categories.keys().next_back().copied().unwrap_or(0) + 1;
        state.categories.insert(
            id,
            Category {
                id,
                name: name.into(),
            },
        );
        id
    }

    pub fn add_user(&self, name: impl Into<String>) -> UserId {
        let mut state = self.write();
        let id = state.users.keys().next_back().copied().unwrap_or(0) + 1;
        state.users.insert(
            id,
            User {
                id,
                name: name.into(),
            },
        );
        id
    }

    /// Validate and store a submitted recipe on behalf of `owner`.
    ///
    /// Ingredient names are trimmed and lowercased, so "Egg" and " egg"
    /// share one ingredient record. Measures are lowercased.
    pub fn submit(&self, owner: UserId, new_recipe: NewRecipe) -> Result<Recipe, CatalogError> {
        new_recipe.validate()?;

        let mut state = self.write();
        if !state.users.contains_key(&owner) {
            return Err(CatalogError::UnknownUser(owner));
        }
        if !state.categories.contains_key(&new_recipe.category_id) {
            return Err(CatalogError::UnknownCategory(new_recipe.category_id));
        }

        let ingredients = new_recipe
            .list_of_ingredients
            .iter()
            .map(|item| {
                let ingredient = state.find_or_create_ingredient(&item.name);
                RecipeIngredient {
                    ingredient_id: ingredient.id,
                    name: ingredient.name,
                    quantity: item.quantity,
                    measure: item.measure.trim().to_lowercase(),
                }
            })
            .collect();

        state.next_recipe_id += 1;
        let now = Utc::now();
        let recipe = Recipe {
            id: state.next_recipe_id,
            name: new_recipe.name.trim().to_string(),
            image: new_recipe.image,
            number_of_servings: new_recipe.number_of_servings,
            cooking_time: new_recipe.cooking_time,
            how_to_cook: new_recipe.how_to_cook,
            category_id: new_recipe.category_id,
            user_id: owner,
            created_at: now,
            updated_at: now,
            ingredients,
        };
        state.recipes.insert(recipe.id, recipe.clone());

        info!("Saved recipe {} '{}'", recipe.id, recipe.name);
        Ok(recipe)
    }

    pub fn get(&self, id: RecipeId) -> Option<Recipe> {
        self.read().recipes.get(&id).cloned()
    }

    /// Remove a recipe together with its ingredient attachments
    pub fn remove(&self, id: RecipeId) -> Option<Recipe> {
        self.write().recipes.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.read().recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All recipes, ordered by id
    pub fn recipes(&self) -> Vec<Recipe> {
        self.read().recipes.values().cloned().collect()
    }

    /// The shared ingredient table, in creation order
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.read().ingredients.clone()
    }
}

#[async_trait]
impl RecipeSource for InMemoryCatalog {
    fn source_name(&self) -> &str {
        "memory"
    }

    async fn fetch_candidates(
        &self,
        filter: &TimeAndCategoryFilter,
    ) -> Result<Vec<Recipe>, CatalogError> {
        let (candidates, total) = {
            let state = self.read();
            let matching: Vec<Recipe> = state
                .recipes
                .values()
                .filter(|recipe| filter.matches(recipe))
                .cloned()
                .collect();
            (matching, state.recipes.len())
        };
        debug!(
            "memory source returned {} of {} recipes",
            candidates.len(),
            total
        );
        Ok(candidates)
    }
}
