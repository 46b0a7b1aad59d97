//! Pagination helpers for API requests

/// Items per page used by every list view unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination parameters for list endpoints.
///
/// Pages are 1-indexed on the Journal backend.
///
/// # Example
/// ```ignore
/// let params = PaginationParams::new().page(2).limit(10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    /// Page number, starting at 1
    pub page: usize,
    /// Number of items per page
    pub limit: usize,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    /// Create new pagination params with defaults (page 1, 10 items).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Convert to query string parameters.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params_default() {
        let params = PaginationParams::new();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_pagination_params_to_query() {
        let query = PaginationParams::new().page(3).limit(25).to_query_params();
        assert_eq!(
            query,
            vec![("page", "3".to_string()), ("limit", "25".to_string())]
        );
    }

    #[test]
    fn test_pagination_params_clamp_to_one() {
        let params = PaginationParams::new().page(0).limit(0);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 1);
    }
}
