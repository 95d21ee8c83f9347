use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use super::RecipeSource;
use crate::error::CatalogError;
use crate::model::{Category, Recipe, User};
use crate::pipelines::TimeAndCategoryFilter;

/// On-disk layout of a catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl CatalogFile {
    /// Read and parse a catalog file
    ///
    /// # Errors
    /// Returns `CatalogError::Io` if the file cannot be read and
    /// `CatalogError::Json` if it is not a valid catalog document.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read(path).await?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Like [`CatalogFile::load`], but a missing file is an empty catalog
    pub async fn load_or_default(path: &Path) -> Result<Self, CatalogError> {
        if fs::try_exists(path).await? {
            Self::load(path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Write the catalog to `path`, replacing any existing file
    pub async fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data).await?;
        debug!("Wrote {} recipes to {}", self.recipes.len(), path.display());
        Ok(())
    }
}

/// Recipe source backed by a JSON catalog file.
///
/// The file is re-read on every search, so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecipeSource for JsonFileSource {
    fn source_name(&self) -> &str {
        "json_file"
    }

    async fn fetch_candidates(
        &self,
        filter: &TimeAndCategoryFilter,
    ) -> Result<Vec<Recipe>, CatalogError> {
        let catalog = CatalogFile::load(&self.path).await?;
        let total = catalog.recipes.len();

        let mut candidates: Vec<Recipe> = catalog
            .recipes
            .into_iter()
            .filter(|recipe| filter.matches(recipe))
            .collect();
        candidates.sort_by_key(|recipe| recipe.id);

        debug!(
            "{} returned {} of {} recipes",
            self.path.display(),
            candidates.len(),
            total
        );
        Ok(candidates)
    }
}
