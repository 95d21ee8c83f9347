use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::model::CategoryId;

/// An already-validated recipe search request.
///
/// The numeric filters use `0` as a sentinel for "no constraint", the same
/// as leaving them unset. Read them through the accessor methods, which fold
/// both cases into `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub min_time: Option<u32>,
    #[serde(default)]
    pub max_time: Option<u32>,
    #[serde(default, alias = "category")]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// 1-based
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower cooking-time bound in minutes, if one applies
    pub fn min_time(&self) -> Option<u32> {
        self.min_time.filter(|&t| t > 0)
    }

    /// Upper cooking-time bound in minutes, if one applies
    pub fn max_time(&self) -> Option<u32> {
        self.max_time.filter(|&t| t > 0)
    }

    pub fn category(&self) -> Option<CategoryId> {
        self.category_id.filter(|&c| c > 0)
    }

    /// Requested page, 1-based. Unset and `0` both mean the first page.
    pub fn page(&self) -> u32 {
        self.page.filter(|&p| p > 0).unwrap_or(1)
    }

    /// Page size: the requested limit, or the configured default when unset.
    ///
    /// A cap applies only when the configuration sets `max_limit`.
    pub fn limit(&self, config: &SearchConfig) -> u32 {
        let limit = self
            .limit
            .filter(|&l| l > 0)
            .unwrap_or(config.default_limit)
            .max(1);
        match config.max_limit {
            Some(max) => limit.min(max.max(1)),
            None => limit,
        }
    }
}
