use crate::model::{CategoryId, Recipe};
use crate::query::SearchQuery;

/// The structural part of a search: cooking-time bounds and category.
///
/// Every bound is optional; an absent bound places no constraint on the
/// recipe. All present bounds must hold for a recipe to pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeAndCategoryFilter {
    pub min_time: Option<u32>,
    pub max_time: Option<u32>,
    pub category: Option<CategoryId>,
}

impl TimeAndCategoryFilter {
    pub fn from_query(query: &SearchQuery) -> Self {
        Self {
            min_time: query.min_time(),
            max_time: query.max_time(),
            category: query.category(),
        }
    }

    /// Whether no bound is set, so every recipe passes
    pub fn is_unconstrained(&self) -> bool {
        self.min_time.is_none() && self.max_time.is_none() && self.category.is_none()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.min_time.map_or(true, |min| recipe.cooking_time >= min)
            && self.max_time.map_or(true, |max| recipe.cooking_time <= max)
            && self.category.map_or(true, |c| recipe.category_id == c)
    }
}

/// Keep the candidates that satisfy the query's time and category bounds.
///
/// Accepts any iterator so candidates can be streamed from a source; the
/// relative order of the survivors is preserved.
pub fn filter<I>(candidates: I, query: &SearchQuery) -> Vec<Recipe>
where
    I: IntoIterator<Item = Recipe>,
{
    let predicate = TimeAndCategoryFilter::from_query(query);
    candidates
        .into_iter()
        .filter(|recipe| predicate.matches(recipe))
        .collect()
}
