pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod pipelines;
pub mod query;
pub mod sources;
pub mod submission;

use log::{debug, info};

// Re-export commonly used types
pub use builder::{RecipeSearch, RecipeSearchBuilder};
pub use config::{CatalogConfig, SearchConfig};
pub use error::CatalogError;
pub use model::{Category, Ingredient, Recipe, RecipeIngredient, User};
pub use pipelines::{MatchResult, PageInfo, RankedRecipe, SearchResults, TimeAndCategoryFilter};
pub use query::SearchQuery;
pub use sources::{InMemoryCatalog, JsonFileSource, RecipeSource};
pub use submission::{NewIngredient, NewRecipe};

/// Fetch candidates from `source` and run the search pipeline over them.
///
/// The source gets the query's time and category bounds so it can narrow
/// its result early; ranking and pagination always happen here.
///
/// # Errors
/// Returns `CatalogError::NotFound` when the query names ingredients that no
/// candidate contains, or whatever error the source reports.
pub async fn search_recipes(
    source: &dyn RecipeSource,
    query: &SearchQuery,
    config: &SearchConfig,
) -> Result<SearchResults, CatalogError> {
    let filter = TimeAndCategoryFilter::from_query(query);
    debug!("Searching {} with {:?}", source.source_name(), query);

    let candidates = source.fetch_candidates(&filter).await?;
    let results = pipelines::search(candidates, query, config)?;

    info!(
        "Search on {} returned {} recipes (page {}, {} total)",
        source.source_name(),
        results.recipes.len(),
        results.pagination.page,
        results.pagination.total
    );
    Ok(results)
}

/// Search a JSON catalog file with the default pagination settings.
///
/// # Example
/// ```no_run
/// # use recipe_catalog::{search_catalog_file, SearchQuery};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let query = SearchQuery {
///     ingredients: vec!["egg".to_string()],
///     ..Default::default()
/// };
/// let results = search_catalog_file("recipes.json", &query).await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_catalog_file(
    path: impl Into<std::path::PathBuf>,
    query: &SearchQuery,
) -> Result<SearchResults, CatalogError> {
    let source = JsonFileSource::new(path);
    search_recipes(&source, query, &SearchConfig::default()).await
}
