use thiserror::Error;

/// Errors that can occur while searching or maintaining the recipe catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// An ingredient-filtered search matched no recipes
    #[error("no recipes match the requested ingredients")]
    NotFound,

    /// A submitted recipe failed field validation
    #[error("Invalid recipe: {0}")]
    Validation(String),

    /// A submitted recipe references a category that does not exist
    #[error("Unknown category: {0}")]
    UnknownCategory(u64),

    /// A submitted recipe references an owner that does not exist
    #[error("Unknown user: {0}")]
    UnknownUser(u64),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Failed to read or write a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file or submission is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl CatalogError {
    /// Whether this is the user-facing "nothing matched" condition rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::NotFound;
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "no recipes match the requested ingredients");
    }

    #[test]
    fn test_other_errors_are_not_not_found() {
        assert!(!CatalogError::Validation("name is required".to_string()).is_not_found());
        assert!(!CatalogError::UnknownCategory(7).is_not_found());
    }
}
