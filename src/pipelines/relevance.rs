use log::debug;
use serde::Serialize;

use crate::error::CatalogError;
use crate::model::Recipe;

/// Which requested ingredient names a recipe contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Distinct requested names found, in request order
    pub matched_names: Vec<String>,
}

impl MatchResult {
    pub fn count(&self) -> usize {
        self.matched_names.len()
    }
}

/// A recipe as it leaves the relevance stage.
///
/// `matches` is `None` when the search did not ask for any ingredients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRecipe {
    pub recipe: Recipe,
    pub matches: Option<MatchResult>,
}

impl RankedRecipe {
    pub fn match_count(&self) -> usize {
        self.matches.as_ref().map_or(0, MatchResult::count)
    }
}

/// Whether `recipe` has an ingredient whose name contains `requested`.
///
/// Matching is a case-insensitive substring test, so "garlic" matches
/// "garlic powder". A blank name never matches.
pub fn has_ingredient(recipe: &Recipe, requested: &str) -> bool {
    let needle = requested.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }
    recipe
        .ingredient_names()
        .any(|name| name.to_lowercase().contains(&needle))
}

/// Collect the distinct requested names that `recipe` contains.
pub fn match_ingredients(recipe: &Recipe, requested: &[String]) -> MatchResult {
    let mut matched_names: Vec<String> = Vec::new();
    for name in requested {
        let normalized = name.trim().to_lowercase();
        if matched_names.contains(&normalized) {
            continue;
        }
        if has_ingredient(recipe, &normalized) {
            matched_names.push(normalized);
        }
    }
    MatchResult { matched_names }
}

/// Rank candidates by how many requested ingredients they contain.
///
/// With no requested ingredients the candidates pass through unchanged and
/// unannotated. Otherwise recipes without any match are dropped, the rest are
/// stably sorted by match count (highest first), and an empty outcome is
/// reported as [`CatalogError::NotFound`].
pub fn rank(
    candidates: Vec<Recipe>,
    ingredient_names: &[String],
) -> Result<Vec<RankedRecipe>, CatalogError> {
    if ingredient_names.is_empty() {
        return Ok(candidates
            .into_iter()
            .map(|recipe| RankedRecipe {
                recipe,
                matches: None,
            })
            .collect());
    }

    let total = candidates.len();
    let mut ranked: Vec<RankedRecipe> = candidates
        .into_iter()
        .filter_map(|recipe| {
            let matches = match_ingredients(&recipe, ingredient_names);
            (matches.count() > 0).then_some(RankedRecipe {
                recipe,
                matches: Some(matches),
            })
        })
        .collect();

    debug!(
        "{} of {} candidates contain at least one of {:?}",
        ranked.len(),
        total,
        ingredient_names
    );

    if ranked.is_empty() {
        return Err(CatalogError::NotFound);
    }

    // sort_by is stable: equal counts keep candidate order
    ranked.sort_by(|a, b| b.match_count().cmp(&a.match_count()));
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipelines::test_support::recipe;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn ids(ranked: &[RankedRecipe]) -> Vec<u64> {
        ranked.iter().map(|r| r.recipe.id).collect()
    }

    #[test]
    fn test_substring_match_counts_each_requested_name_once() {
        let r = recipe(1, 10, 1, &["garlic powder", "salt"]);
        let result = match_ingredients(&r, &names(&["garlic", "onion"]));
        assert_eq!(result.count(), 1);
        assert_eq!(result.matched_names, vec!["garlic"]);
    }

    #[test]
    fn test_duplicate_requests_do_not_inflate_count() {
        let r = recipe(1, 10, 1, &["garlic"]);
        let result = match_ingredients(&r, &names(&["garlic", "garlic", "GARLIC "]));
        assert_eq!(result.count(), 1);
    }

    #[test]
    fn test_one_name_matching_several_ingredients_counts_once() {
        let r = recipe(1, 10, 1, &["garlic", "garlic powder", "black garlic"]);
        assert_eq!(match_ingredients(&r, &names(&["garlic"])).count(), 1);
    }

    #[test]
    fn test_blank_names_never_match() {
        let r = recipe(1, 10, 1, &["egg", "flour"]);
        assert!(!has_ingredient(&r, ""));
        assert!(!has_ingredient(&r, "   "));
        assert_eq!(match_ingredients(&r, &names(&["", " \t"])).count(), 0);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let r = recipe(1, 10, 1, &["olive oil"]);
        assert!(has_ingredient(&r, "OIL"));
        assert!(has_ingredient(&r, "Olive"));
        assert!(!has_ingredient(&r, "olive oil extra"));
    }

    #[test]
    fn test_matched_names_follow_request_order() {
        let r = recipe(1, 10, 1, &["milk", "egg", "sugar"]);
        let result = match_ingredients(&r, &names(&["sugar", "egg", "flour"]));
        assert_eq!(result.matched_names, vec!["sugar", "egg"]);
    }

    #[test]
    fn test_rank_orders_by_count_and_keeps_ties_stable() {
        let c = recipe(3, 10, 1, &["egg"]);
        let a = recipe(1, 10, 1, &["egg", "milk"]);
        let b = recipe(2, 10, 1, &["egg", "milk", "salt"]);

        let ranked = rank(vec![c, a, b], &names(&["egg", "milk"])).unwrap();
        assert_eq!(ids(&ranked), vec![1, 2, 3]);
        assert_eq!(ranked[0].match_count(), 2);
        assert_eq!(ranked[2].match_count(), 1);
    }

    #[test]
    fn test_rank_drops_recipes_without_matches() {
        let ranked = rank(
            vec![
                recipe(1, 10, 1, &["egg"]),
                recipe(2, 10, 1, &["rice"]),
                recipe(3, 10, 1, &["egg white"]),
            ],
            &names(&["egg"]),
        )
        .unwrap();
        assert_eq!(ids(&ranked), vec![1, 3]);
    }

    #[test]
    fn test_rank_without_matches_is_not_found() {
        let err = rank(
            vec![recipe(1, 10, 1, &["egg"]), recipe(2, 10, 1, &["rice"])],
            &names(&["unicorn-meat"]),
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_rank_with_only_blank_names_is_not_found() {
        let err = rank(vec![recipe(1, 10, 1, &["egg"])], &names(&[""])).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_rank_on_empty_candidates_with_request_is_not_found() {
        assert!(rank(Vec::new(), &names(&["egg"])).unwrap_err().is_not_found());
    }

    #[test]
    fn test_empty_request_passes_candidates_through() {
        let candidates = vec![
            recipe(3, 10, 1, &["egg"]),
            recipe(1, 10, 1, &[]),
            recipe(2, 10, 1, &["rice"]),
        ];
        let ranked = rank(candidates.clone(), &[]).unwrap();
        assert_eq!(ids(&ranked), vec![3, 1, 2]);
        assert!(ranked.iter().all(|r| r.matches.is_none()));
        assert_eq!(ranked[0].recipe, candidates[0]);
    }
}
