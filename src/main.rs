use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, error, info};

use recipe_catalog::sources::CatalogFile;
use recipe_catalog::{
    search_recipes, CatalogConfig, CatalogError, InMemoryCatalog, JsonFileSource, NewRecipe,
    SearchQuery,
};

/// Search and maintain a JSON recipe catalog
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Catalog file (defaults to `catalog_path` from the configuration)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search recipes, ranked by requested ingredients
    Search {
        /// Minimum cooking time in minutes (0 = no minimum)
        #[arg(long, default_value_t = 0)]
        min_time: u32,
        /// Maximum cooking time in minutes (0 = no maximum)
        #[arg(long, default_value_t = 0)]
        max_time: u32,
        /// Category id (0 = any category)
        #[arg(long, default_value_t = 0)]
        category: u64,
        /// Ingredient to look for; repeat for several
        #[arg(long = "ingredient", short = 'i')]
        ingredients: Vec<String>,
        /// 1-based page number
        #[arg(long)]
        page: Option<u32>,
        /// Page size
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Validate a recipe submission and add it to the catalog
    Add {
        /// JSON file holding the submitted recipe
        #[arg(long)]
        recipe: PathBuf,
        /// Id of the submitting user
        #[arg(long)]
        owner: u64,
    },
    /// Register a recipe owner and print its id
    AddUser {
        name: String,
    },
    /// Register a recipe category and print its id
    AddCategory {
        name: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_not_found() => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CatalogError> {
    let config = CatalogConfig::load()?;
    let catalog_path = cli
        .catalog
        .unwrap_or_else(|| PathBuf::from(&config.catalog_path));
    debug!("Using catalog {}", catalog_path.display());

    match cli.command {
        Command::Search {
            min_time,
            max_time,
            category,
            ingredients,
            page,
            limit,
        } => {
            let query = SearchQuery {
                min_time: Some(min_time),
                max_time: Some(max_time),
                category_id: Some(category),
                ingredients,
                page,
                limit,
            };
            let source = JsonFileSource::new(catalog_path);
            let results = search_recipes(&source, &query, &config.search).await?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Command::Add { recipe, owner } => {
            let recipe = add_recipe(&catalog_path, &recipe, owner).await?;
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        }
        Command::AddUser { name } => {
            let id = update_catalog(&catalog_path, |catalog| Ok(catalog.add_user(name))).await?;
            info!("Registered user {}", id);
            println!("{}", id);
        }
        Command::AddCategory { name } => {
            let id = update_catalog(&catalog_path, |catalog| Ok(catalog.add_category(name))).await?;
            info!("Registered category {}", id);
            println!("{}", id);
        }
    }

    Ok(())
}

async fn add_recipe(
    catalog_path: &Path,
    submission_path: &Path,
    owner: u64,
) -> Result<recipe_catalog::Recipe, CatalogError> {
    let submission: NewRecipe =
        serde_json::from_slice(&tokio::fs::read(submission_path).await?)?;

    update_catalog(catalog_path, |catalog| catalog.submit(owner, submission)).await
}

/// Loads the catalog (empty if the file is missing), applies `change` and
/// writes the result back. Nothing is written when `change` fails.
async fn update_catalog<T>(
    catalog_path: &Path,
    change: impl FnOnce(&InMemoryCatalog) -> Result<T, CatalogError>,
) -> Result<T, CatalogError> {
    let catalog = InMemoryCatalog::from_catalog(CatalogFile::load_or_default(catalog_path).await?);
    let outcome = change(&catalog)?;
    catalog.snapshot().save(catalog_path).await?;
    Ok(outcome)
}
