use std::sync::Arc;

use recipe_catalog::{
    CatalogError, InMemoryCatalog, NewIngredient, NewRecipe, RecipeSearch, RecipeSource,
    SearchConfig,
};

fn submission(name: &str, cooking_time: u32, category_id: u64, ingredients: &[&str]) -> NewRecipe {
    NewRecipe {
        name: name.to_string(),
        number_of_servings: 2,
        cooking_time,
        how_to_cook: vec!["Chop".to_string(), "Cook".to_string()],
        category_id,
        list_of_ingredients: ingredients
            .iter()
            .map(|name| NewIngredient {
                name: name.to_string(),
                quantity: 100.0,
                measure: "G".to_string(),
            })
            .collect(),
        image: "upload-folder-1".to_string(),
    }
}

fn kitchen() -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();
    let user = catalog.add_user("chef");
    let mains = catalog.add_category("mains");
    let desserts = catalog.add_category("desserts");

    for recipe in [
        submission("Garlic Bread", 15, mains, &["Bread", "Garlic Butter"]),
        submission("Onion Soup", 60, mains, &["Onion", "Beef Stock", "garlic"]),
        submission("Brownies", 35, desserts, &["Chocolate", "Butter", "Egg"]),
        submission("Aglio e Olio", 20, mains, &["Spaghetti", "GARLIC", "Olive Oil"]),
    ] {
        catalog.submit(user, recipe).unwrap();
    }
    catalog
}

fn names(results: &recipe_catalog::SearchResults) -> Vec<&str> {
    results
        .recipes
        .iter()
        .map(|r| r.recipe.name.as_str())
        .collect()
}

#[tokio::test]
async fn test_builder_ranks_by_ingredients() {
    let results = RecipeSearch::builder()
        .source(kitchen())
        .ingredients(["garlic", "butter"])
        .run()
        .await
        .unwrap();

    assert_eq!(
        names(&results),
        vec!["Garlic Bread", "Onion Soup", "Brownies", "Aglio e Olio"]
    );
    let counts: Vec<usize> = results.recipes.iter().map(|r| r.match_count()).collect();
    assert_eq!(counts, vec![2, 1, 1, 1]);
}

#[tokio::test]
async fn test_builder_combines_filters() {
    let results = RecipeSearch::builder()
        .source(kitchen())
        .min_time(10)
        .max_time(30)
        .category(1)
        .ingredient("Garlic")
        .run()
        .await
        .unwrap();

    assert_eq!(names(&results), vec!["Garlic Bread", "Aglio e Olio"]);
}

#[tokio::test]
async fn test_builder_zero_values_do_not_constrain() {
    let results = RecipeSearch::builder()
        .source(kitchen())
        .min_time(0)
        .max_time(0)
        .category(0)
        .run()
        .await
        .unwrap();

    assert_eq!(results.recipes.len(), 4);
}

#[tokio::test]
async fn test_builder_pagination_and_config() {
    let results = RecipeSearch::builder()
        .source(kitchen())
        .config(SearchConfig {
            default_limit: 3,
            max_limit: Some(10),
        })
        .page(2)
        .run()
        .await
        .unwrap();

    assert_eq!(names(&results), vec!["Aglio e Olio"]);
    assert_eq!(results.pagination.limit, 3);
    assert_eq!(results.pagination.page_count(), 2);
}

#[tokio::test]
async fn test_builder_shared_source_sees_new_submissions() {
    let catalog = Arc::new(kitchen());
    let shared: Arc<dyn RecipeSource> = catalog.clone();

    catalog
        .submit(1, submission("Garlic Prawns", 10, 1, &["Prawns", "garlic"]))
        .unwrap();

    let results = RecipeSearch::builder()
        .shared_source(shared)
        .max_time(10)
        .ingredient("prawn")
        .run()
        .await
        .unwrap();
    assert_eq!(names(&results), vec!["Garlic Prawns"]);
}

#[tokio::test]
async fn test_builder_not_found() {
    let result = RecipeSearch::builder()
        .source(kitchen())
        .ingredient("saffron")
        .run()
        .await;

    assert!(matches!(result, Err(CatalogError::NotFound)));
}

#[tokio::test]
async fn test_builder_requires_source() {
    let result = RecipeSearch::builder().ingredient("egg").run().await;

    match result {
        Err(CatalogError::BuilderError(msg)) => assert!(msg.contains("source")),
        _ => panic!("Expected BuilderError"),
    }
}
