//! Transient UI state for one table view.
//!
//! Bundles the filter state, page state, and detail selection a table view
//! owns. Created when the view is entered, discarded when it is left; never
//! persisted. The one cross-cutting invariant lives here: *every* filter
//! mutation resets the current page to 1, so the user can never be left on a
//! page that no longer exists after the filtered set shrinks.

use crate::model::{RecordId, SortField};
use crate::pipeline::{CategoryFilter, FilterState, PageState};

/// Filter + page + selection state for a table view.
#[derive(Debug, Clone)]
pub struct TableState<F> {
    /// Current filter/sort configuration.
    pub filter: FilterState<F>,
    /// Current page position.
    pub page: PageState,
    selected: Option<RecordId>,
    /// Whether keystrokes currently edit the search text.
    pub search_editing: bool,
    /// Highlighted row within the current page.
    pub cursor: usize,
}

impl<F: SortField> TableState<F> {
    /// Fresh state at defaults for a view with the given page size.
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: FilterState::default(),
            page: PageState::new(page_size),
            selected: None,
            search_editing: false,
            cursor: 0,
        }
    }

    // --- filter mutations; each one resets pagination ---

    /// Append a character to the search text.
    pub fn push_search_char(&mut self, ch: char) {
        self.filter.search_text.push(ch);
        self.reset_position();
    }

    /// Remove the last character of the search text.
    pub fn pop_search_char(&mut self) {
        self.filter.search_text.pop();
        self.reset_position();
    }

    /// Clear the search text entirely.
    pub fn clear_search(&mut self) {
        self.filter.search_text.clear();
        self.reset_position();
    }

    /// Step the category filter through the given tag set.
    pub fn cycle_category(&mut self, categories: &[String]) {
        self.filter.category = self.filter.category.cycle(categories);
        self.reset_position();
    }

    /// Step to the next sort field.
    pub fn cycle_sort_field(&mut self) {
        self.filter.sort_field = self.filter.sort_field.next();
        self.reset_position();
    }

    /// Flip the sort direction.
    pub fn toggle_sort_direction(&mut self) {
        self.filter.sort_direction = self.filter.sort_direction.toggled();
        self.reset_position();
    }

    fn reset_position(&mut self) {
        self.page.reset();
        self.cursor = 0;
    }

    // --- page and cursor movement ---

    /// Advance to the next page, moving the cursor to its top.
    pub fn next_page(&mut self, total_pages: usize) {
        self.page.next_page(total_pages);
        self.cursor = 0;
    }

    /// Go back one page, moving the cursor to its top.
    pub fn prev_page(&mut self) {
        // Going backward never needs the total; page 1 is the floor.
        self.page.current_page = self.page.current_page.saturating_sub(1).max(1);
        self.cursor = 0;
    }

    /// Move the highlighted row down within the current page.
    pub fn cursor_down(&mut self, page_len: usize) {
        if self.cursor + 1 < page_len {
            self.cursor += 1;
        }
    }

    /// Move the highlighted row up within the current page.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    // --- detail selection: at most one record open at a time ---

    /// Open a record for detail, replacing any previously open one.
    pub fn select(&mut self, id: RecordId) {
        self.selected = Some(id);
    }

    /// Close the detail view.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The currently opened record, if any.
    pub fn selected(&self) -> Option<&RecordId> {
        self.selected.as_ref()
    }
}
