//! Page arithmetic for list queries.

/// Page used when the caller supplies none (or an unusable one).
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller supplies none (or an unusable one).
pub const DEFAULT_LIMIT: u32 = 10;
/// Upper bound on a single page.
pub const MAX_LIMIT: u32 = 1000;

/// A normalized page request.
///
/// Always holds `page >= 1` and `1 <= limit <= MAX_LIMIT`, so the storage
/// layer never sees a value it has to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Builds a page request, substituting defaults for zero values and
    /// capping `limit` at [`MAX_LIMIT`].
    pub fn new(page: u32, limit: u32) -> Self {
        let page = if page == 0 { DEFAULT_PAGE } else { page };
        let limit = match limit {
            0 => DEFAULT_LIMIT,
            l => l.min(MAX_LIMIT),
        };
        Self { page, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Rows to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// One page of records plus the row count of the whole table.
///
/// `count` comes from a separate unfiltered `COUNT(*)` and is not read in the
/// same snapshot as `items`.
#[derive(Debug, Clone)]
pub struct ListPage<R> {
    pub items: Vec<R>,
    pub count: i64,
}

impl<R> ListPage<R> {
    pub fn new(items: Vec<R>, count: i64) -> Self {
        Self { items, count }
    }

    /// Converts every item, keeping the count.
    pub fn map<T>(self, f: impl FnMut(R) -> T) -> ListPage<T> {
        ListPage {
            items: self.items.into_iter().map(f).collect(),
            count: self.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_has_zero_offset() {
        let page = PageRequest::new(1, 10);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn test_offset_is_page_minus_one_times_limit() {
        assert_eq!(PageRequest::new(2, 10).offset(), 10);
        assert_eq!(PageRequest::new(3, 25).offset(), 50);
        assert_eq!(PageRequest::new(7, 1).offset(), 6);
    }

    #[test]
    fn test_zero_values_fall_back_to_defaults() {
        let page = PageRequest::new(0, 0);
        assert_eq!(page.page(), DEFAULT_PAGE);
        assert_eq!(page.limit(), DEFAULT_LIMIT);
        assert_eq!(page, PageRequest::default());
    }

    #[test]
    fn test_limit_is_capped() {
        assert_eq!(PageRequest::new(1, 5000).limit(), MAX_LIMIT);
        assert_eq!(PageRequest::new(1, MAX_LIMIT).limit(), MAX_LIMIT);
    }

    #[test]
    fn test_offset_does_not_overflow_u32() {
        let page = PageRequest::new(u32::MAX, MAX_LIMIT);
        assert_eq!(page.offset(), (i64::from(u32::MAX) - 1) * 1000);
    }

    #[test]
    fn test_list_page_map_keeps_count() {
        let page = ListPage::new(vec![1, 2, 3], 42).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20, 30]);
        assert_eq!(page.count, 42);
    }
}
