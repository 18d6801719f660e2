//! Pagination types
//!
//! Pages are 1-indexed with a fixed size of [`QUESTIONS_PER_PAGE`]. A page past
//! the end of the data is empty, never an error; callers decide whether an
//! empty page means "not found".

use serde::{Deserialize, Serialize};

/// Items per page for every question listing
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
}

impl Pagination {
    /// Create pagination, clamping the page to a minimum of 1.
    pub fn new(page: i64) -> Self {
        let page = page.clamp(1, u32::MAX as i64) as u32;
        Self { page }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * QUESTIONS_PER_PAGE as u64
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        QUESTIONS_PER_PAGE
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Slice one page out of a full ordered sequence.
///
/// Returns `items[(page-1)*10 .. (page-1)*10+10]`, truncated at the end of
/// the sequence.
pub fn paginate<T>(items: &[T], page: Pagination) -> &[T] {
    let start = usize::try_from(page.offset())
        .unwrap_or(usize::MAX)
        .min(items.len());
    let end = start.saturating_add(page.limit() as usize).min(items.len());
    &items[start..end]
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
}

impl<T> Paginated<T> {
    /// Build a page from a full in-memory sequence.
    pub fn from_slice(all: &[T], page: Pagination) -> Self
    where
        T: Clone,
    {
        Self {
            items: paginate(all, page).to_vec(),
            total: all.len() as i64,
            page: page.page,
        }
    }
}

/// Query parameters for pagination.
///
/// `page` is kept as raw text so a non-numeric value falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let page = params
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: i32) -> Vec<i32> {
        (1..=n).collect()
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1).offset(), 0);
        assert_eq!(Pagination::new(2).offset(), 10);
        assert_eq!(Pagination::new(5).offset(), 40);
    }

    #[test]
    fn clamps_page() {
        assert_eq!(Pagination::new(0).page, 1);
        assert_eq!(Pagination::new(-3).page, 1);
        assert_eq!(Pagination::new(i64::MAX).page, u32::MAX);
    }

    #[test]
    fn slices_matching_window() {
        let all = numbers(25);
        for page in 1..=4 {
            let p = Pagination::new(page);
            let start = (((page - 1) * 10) as usize).min(all.len());
            let end = (start + 10).min(all.len());
            let expected = &all[start..end];
            let got = paginate(&all, p);
            assert!(got.len() <= 10);
            assert_eq!(got, expected, "page {}", page);
        }
    }

    #[test]
    fn last_page_is_partial() {
        let all = numbers(12);
        assert_eq!(paginate(&all, Pagination::new(2)), &[11, 12]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let all = numbers(12);
        assert!(paginate(&all, Pagination::new(3)).is_empty());
        assert!(paginate(&all, Pagination::new(u32::MAX as i64)).is_empty());

        let empty: Vec<i32> = vec![];
        assert!(paginate(&empty, Pagination::default()).is_empty());
    }

    #[test]
    fn from_slice_reports_full_total() {
        let all = numbers(23);
        let page = Paginated::from_slice(&all, Pagination::new(3));
        assert_eq!(page.items, vec![21, 22, 23]);
        assert_eq!(page.total, 23);
        assert_eq!(page.page, 3);
    }

    #[test]
    fn params_default_to_first_page() {
        let p = Pagination::from(PaginationParams { page: None });
        assert_eq!(p.page, 1);

        let p = Pagination::from(PaginationParams {
            page: Some("abc".into()),
        });
        assert_eq!(p.page, 1);

        let p = Pagination::from(PaginationParams {
            page: Some("4".into()),
        });
        assert_eq!(p.page, 4);
    }
}
