mod json_file;
mod memory;

pub use json_file::{CatalogFile, JsonFileSource};
pub use memory::InMemoryCatalog;

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::model::Recipe;
use crate::pipelines::TimeAndCategoryFilter;

/// Where the search pipeline gets its candidate recipes from.
///
/// Implementations hand back recipes with their ingredients already
/// attached, ordered by ascending recipe id. That order is what ties in
/// ranking fall back to, so it must be the same on every call.
///
/// A source may apply `filter` itself (e.g. as a database `WHERE` clause);
/// the pipeline re-applies it, so returning extra recipes is harmless.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "memory", "json_file")
    fn source_name(&self) -> &str;

    /// Fetch the candidate recipes for a search
    async fn fetch_candidates(
        &self,
        filter: &TimeAndCategoryFilter,
    ) -> Result<Vec<Recipe>, CatalogError>;
}
