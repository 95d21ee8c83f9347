use std::sync::Arc;

use crate::config::SearchConfig;
use crate::pipelines::SearchResults;
use crate::sources::RecipeSource;
use crate::{search_recipes, CatalogError, SearchQuery};

/// Builder for configuring and executing a recipe search
#[derive(Default)]
pub struct RecipeSearchBuilder {
    source: Option<Arc<dyn RecipeSource>>,
    query: SearchQuery,
    config: SearchConfig,
}

impl RecipeSearchBuilder {
    /// Set the data source to search
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::{InMemoryCatalog, RecipeSearch};
    ///
    /// let builder = RecipeSearch::builder()
    ///     .source(InMemoryCatalog::new());
    /// ```
    pub fn source(mut self, source: impl RecipeSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Set a data source that is shared with other owners
    pub fn shared_source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace every query parameter at once
    pub fn query(mut self, query: SearchQuery) -> Self {
        self.query = query;
        self
    }

    /// Only include recipes taking at least `minutes` to cook (`0` disables)
    pub fn min_time(mut self, minutes: u32) -> Self {
        self.query.min_time = Some(minutes);
        self
    }

    /// Only include recipes taking at most `minutes` to cook (`0` disables)
    pub fn max_time(mut self, minutes: u32) -> Self {
        self.query.max_time = Some(minutes);
        self
    }

    /// Only include recipes in this category (`0` disables)
    pub fn category(mut self, category_id: u64) -> Self {
        self.query.category_id = Some(category_id);
        self
    }

    /// Add an ingredient to rank by
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredient("garlic")
    ///     .ingredient("onion");
    /// ```
    pub fn ingredient(mut self, name: impl Into<String>) -> Self {
        self.query.ingredients.push(name.into());
        self
    }

    /// Add several ingredients to rank by
    pub fn ingredients<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query
            .ingredients
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Select a 1-based page
    pub fn page(mut self, page: u32) -> Self {
        self.query.page = Some(page);
        self
    }

    /// Set the page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.query.limit = Some(limit);
        self
    }

    /// Override the pagination defaults
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the search
    ///
    /// # Errors
    /// Returns `CatalogError` if:
    /// - No source was specified
    /// - The source fails to produce candidates
    /// - Ingredients were requested and no recipe contains any of them
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_catalog::{JsonFileSource, RecipeSearch};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let results = RecipeSearch::builder()
    ///     .source(JsonFileSource::new("recipes.json"))
    ///     .max_time(30)
    ///     .ingredient("egg")
    ///     .run()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run(self) -> Result<SearchResults, CatalogError> {
        let source = self.source.ok_or_else(|| {
            CatalogError::BuilderError("No recipe source specified. Use .source()".to_string())
        })?;

        search_recipes(source.as_ref(), &self.query, &self.config).await
    }
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder for searching recipes
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder();
    /// ```
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}
