/// Clamped page-index state for card lists
///
/// The pager never wraps: next/prev stop at the bounds. The item count
/// is passed into each operation so the pager itself stays a plain
/// value with one invariant: `0 <= page <= max(1, total_pages) - 1`.

/// Page-index state over a list of a given page size
#[derive(Debug, Clone, PartialEq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    /// Create a pager; a page size of 0 is treated as 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Current page index (0-based)
    pub fn page(&self) -> usize {
        self.page
    }

    /// Derived page count: `ceil(item_count / page_size)`
    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size)
    }

    /// Advance one page; no-op on the last page
    pub fn next(&mut self, item_count: usize) {
        if self.page + 1 < self.total_pages(item_count) {
            self.page += 1;
        }
    }

    /// Go back one page; no-op on the first page
    pub fn prev(&mut self) {
        if self.page > 0 {
            self.page -= 1;
        }
    }

    /// Jump to `page`, clamped into the valid range
    pub fn go_to(&mut self, page: usize, item_count: usize) {
        let last = self.total_pages(item_count).max(1) - 1;
        self.page = page.min(last);
    }

    /// Back to the first page (the input set changed)
    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// The slice of `items` on the current page
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        let pager = Pager::new(2);

        assert_eq!(pager.total_pages(0), 0);
        assert_eq!(pager.total_pages(1), 1);
        assert_eq!(pager.total_pages(2), 1);
        assert_eq!(pager.total_pages(3), 2);
        assert_eq!(pager.total_pages(5), 3);
    }

    #[test]
    fn test_next_clamps_at_last_page() {
        let mut pager = Pager::new(2);

        // 5 items => pages 0..=2
        for _ in 0..10 {
            pager.next(5);
        }

        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn test_prev_clamps_at_first_page() {
        let mut pager = Pager::new(2);

        pager.prev();
        assert_eq!(pager.page(), 0);

        pager.next(5);
        pager.prev();
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn test_go_to_clamps_into_range() {
        let mut pager = Pager::new(2);

        pager.go_to(99, 5);
        assert_eq!(pager.page(), 2);

        pager.go_to(1, 5);
        assert_eq!(pager.page(), 1);

        // Empty list keeps the pager on page 0
        pager.go_to(7, 0);
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn test_page_slice_bounds() {
        let items = ["a", "b", "c", "d", "e"];
        let mut pager = Pager::new(2);

        assert_eq!(pager.page_slice(&items), &["a", "b"]);

        pager.next(items.len());
        assert_eq!(pager.page_slice(&items), &["c", "d"]);

        // Short last page
        pager.next(items.len());
        assert_eq!(pager.page_slice(&items), &["e"]);
    }

    #[test]
    fn test_page_slice_on_empty_list() {
        let items: [&str; 0] = [];
        let pager = Pager::new(2);

        assert!(pager.page_slice(&items).is_empty());
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let pager = Pager::new(0);

        assert_eq!(pager.total_pages(3), 3);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut pager = Pager::new(1);

        pager.next(4);
        pager.next(4);
        pager.reset();

        assert_eq!(pager.page(), 0);
    }
}
