//! Paginator
//!
//! Fixed-size windows over the filtered metric list. Pages are 1-based.
//!
//! The current page is never clamped when the list shrinks underneath it, so
//! narrowing the search while on a later page can leave an empty table until
//! the user steps back with "Previous".

/// Records per page
pub const PAGE_SIZE: usize = 5;

/// Number of pages needed for `count` records
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Records shown on `page`, `records[(page-1)*size .. page*size]`
///
/// Out-of-range pages yield an empty slice.
pub fn page_slice<T>(records: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// Current page of the metrics table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Advance one page unless already on the last one
    ///
    /// Returns whether the page changed.
    pub fn next(&mut self, total_pages: usize) -> bool {
        if self.page < total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page unless already on the first one
    ///
    /// Returns whether the page changed.
    pub fn prev(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Whether "Previous" is enabled
    pub fn can_prev(&self) -> bool {
        self.page != 1
    }

    /// Whether "Next" is enabled
    ///
    /// Only disabled on exactly the last page. With zero pages the button
    /// stays enabled but `next` does nothing.
    pub fn can_next(&self, total_pages: usize) -> bool {
        self.page != total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(4, PAGE_SIZE), 1);
        assert_eq!(total_pages(5, PAGE_SIZE), 1);
        assert_eq!(total_pages(6, PAGE_SIZE), 2);
        assert_eq!(total_pages(11, PAGE_SIZE), 3);
        assert_eq!(total_pages(3, 0), 0);
    }

    #[test]
    fn test_starts_on_first_page() {
        let pagination = Pagination::new();

        assert_eq!(pagination.page(), 1);
        assert!(!pagination.can_prev());
    }

    #[test]
    fn test_next_stops_at_last_page() {
        let mut pagination = Pagination::new();

        assert!(pagination.next(2));
        assert_eq!(pagination.page(), 2);
        assert!(!pagination.can_next(2));

        assert!(!pagination.next(2));
        assert_eq!(pagination.page(), 2);
    }

    #[test]
    fn test_prev_stops_at_first_page() {
        let mut pagination = Pagination::new();

        assert!(!pagination.prev());
        assert_eq!(pagination.page(), 1);

        pagination.next(3);
        pagination.next(3);
        assert!(pagination.prev());
        assert_eq!(pagination.page(), 2);
    }

    #[test]
    fn test_next_with_no_pages() {
        let mut pagination = Pagination::new();

        assert!(pagination.can_next(0));
        assert!(!pagination.next(0));
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn test_page_slice() {
        let records: Vec<u32> = (1..=12).collect();

        assert_eq!(page_slice(&records, 1, PAGE_SIZE), &[1, 2, 3, 4, 5]);
        assert_eq!(page_slice(&records, 2, PAGE_SIZE), &[6, 7, 8, 9, 10]);
        assert_eq!(page_slice(&records, 3, PAGE_SIZE), &[11, 12]);
        assert!(page_slice(&records, 4, PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_page_slice_short_list() {
        let records = ["a", "b", "c", "d"];

        assert_eq!(page_slice(&records, 1, PAGE_SIZE), &records);
        assert!(page_slice(&records, 2, PAGE_SIZE).is_empty());
    }
}
