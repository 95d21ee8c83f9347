pub mod filter;
pub mod pagination;
pub mod relevance;

use log::debug;
use serde::Serialize;

use crate::config::SearchConfig;
use crate::error::CatalogError;
use crate::model::Recipe;
use crate::query::SearchQuery;

pub use filter::TimeAndCategoryFilter;
pub use pagination::PageInfo;
pub use relevance::{MatchResult, RankedRecipe};

/// One page of ranked search results.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub recipes: Vec<RankedRecipe>,
    pub pagination: PageInfo,
}

/// Run the search pipeline over a set of candidate recipes.
///
/// This pipeline:
/// 1. Drops candidates outside the query's cooking-time bounds or category
/// 2. Ranks the survivors by requested-ingredient matches
/// 3. Slices the requested page
///
/// # Errors
/// Returns [`CatalogError::NotFound`] when the query names ingredients and
/// no remaining recipe contains any of them.
pub fn search<I>(
    candidates: I,
    query: &SearchQuery,
    config: &SearchConfig,
) -> Result<SearchResults, CatalogError>
where
    I: IntoIterator<Item = Recipe>,
{
    let filtered = filter::filter(candidates, query);
    debug!("{} candidates after time/category filter", filtered.len());

    let ranked = relevance::rank(filtered, &query.ingredients)?;
    let total = ranked.len();

    let page = query.page();
    let limit = query.limit(config);
    let recipes = pagination::paginate(ranked, page, limit);
    debug!(
        "page {} (limit {}) holds {} of {} ranked recipes",
        page,
        limit,
        recipes.len(),
        total
    );

    Ok(SearchResults {
        recipes,
        pagination: PageInfo { page, limit, total },
    })
}
