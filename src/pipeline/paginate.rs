//! Pagination stage of the table pipeline.
//!
//! Pagination is purely a display concern: it slices the filtered/sorted
//! sequence for rendering and never sees the export path.

/// Transient page position for one table view.
///
/// `current_page` is 1-based and always clamped into range by [`page`];
/// whichever state object owns a `PageState` must reset it to page 1 whenever
/// the filter state changes, so the user never lands on a silently
/// out-of-range page (see `TableState`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based current page.
    pub current_page: usize,
    /// Rows per page. Fixed for the lifetime of a view.
    pub page_size: usize,
}

impl PageState {
    /// Create page state at page 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            // A zero page size would make every page empty; treat it as 1.
            page_size: page_size.max(1),
        }
    }

    /// Back to page 1 (on filter change).
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Request a specific page; out-of-range requests clamp, never error.
    pub fn request_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    /// Advance one page, clamped to the last page.
    pub fn next_page(&mut self, total_pages: usize) {
        self.request_page(self.current_page + 1, total_pages);
    }

    /// Go back one page, clamped to page 1.
    pub fn prev_page(&mut self, total_pages: usize) {
        self.request_page(self.current_page.saturating_sub(1), total_pages);
    }
}

/// One rendered page of a filtered/sorted sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a, R> {
    /// The slice of records visible on the current page.
    pub items: &'a [R],
    /// Total number of pages, at least 1 even for an empty sequence.
    pub total_pages: usize,
    /// The effective (clamped) current page.
    pub current_page: usize,
}

/// Total pages for a sequence length: `max(1, ceil(len / page_size))`.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Slice the current page out of a filtered/sorted sequence.
///
/// If the requested page exceeds the total (the filter shrank the set since
/// the page was chosen), the page is clamped to the last one rather than
/// returning an empty slice while records exist.
pub fn page<'a, R>(records: &'a [R], state: &PageState) -> PageView<'a, R> {
    let total = total_pages(records.len(), state.page_size);
    let current = state.current_page.clamp(1, total);
    let start = (current - 1) * state.page_size;
    let end = (start + state.page_size).min(records.len());
    // start can only exceed len when the sequence is empty (current == 1).
    let items = if start >= records.len() {
        &records[0..0]
    } else {
        &records[start..end]
    };
    PageView {
        items,
        total_pages: total,
        current_page: current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_with_floor_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn twelve_records_page_size_ten_splits_ten_and_two() {
        let records: Vec<u32> = (0..12).collect();
        let mut state = PageState::new(10);

        let view = page(&records, &state);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.items.len(), 10);

        state.next_page(view.total_pages);
        let view = page(&records, &state);
        assert_eq!(view.current_page, 2);
        assert_eq!(view.items, &[10, 11]);
    }

    #[test]
    fn stale_page_clamps_to_last_instead_of_going_empty() {
        let records: Vec<u32> = (0..12).collect();
        // Page 5 chosen before a filter shrank the set.
        let state = PageState {
            current_page: 5,
            page_size: 10,
        };
        let view = page(&records, &state);
        assert_eq!(view.current_page, 2);
        assert_eq!(view.items, &[10, 11]);
    }

    #[test]
    fn empty_sequence_yields_one_empty_page() {
        let records: Vec<u32> = Vec::new();
        let state = PageState::new(10);
        let view = page(&records, &state);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
        assert!(view.items.is_empty());
    }

    #[test]
    fn page_requests_clamp_at_both_ends() {
        let mut state = PageState::new(10);
        state.request_page(0, 3);
        assert_eq!(state.current_page, 1);
        state.request_page(99, 3);
        assert_eq!(state.current_page, 3);

        state.prev_page(3);
        assert_eq!(state.current_page, 2);
        state.prev_page(3);
        state.prev_page(3);
        assert_eq!(state.current_page, 1, "prev at page 1 stays at 1");

        state.request_page(3, 3);
        state.next_page(3);
        assert_eq!(state.current_page, 3, "next at last page stays at last");
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let state = PageState::new(0);
        assert_eq!(state.page_size, 1);
        let records: Vec<u32> = (0..3).collect();
        let view = page(&records, &state);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.items, &[0]);
    }
}
