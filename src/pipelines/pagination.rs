use serde::Serialize;

/// Where a page sits within the full ranked result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// 1-based page number
    pub page: u32,
    pub limit: u32,
    /// Number of ranked results before slicing
    pub total: usize,
}

impl PageInfo {
    /// Number of pages needed to show `total` results
    pub fn page_count(&self) -> usize {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit as usize)
    }
}

/// Zero-based index of the first item on `page`
pub fn offset(page: u32, limit: u32) -> usize {
    (page.max(1) as usize - 1).saturating_mul(limit as usize)
}

/// Slice `ranked` to the `page`-th window of `limit` items.
///
/// Pages are 1-based. A page past the end yields an empty `Vec`.
/// The input order is kept as-is.
pub fn paginate<T>(ranked: Vec<T>, page: u32, limit: u32) -> Vec<T> {
    let start = offset(page, limit);
    ranked.into_iter().skip(start).take(limit as usize).collect()
}
