//! Pagination math for the data table: page counts, row ranges, navigation.
//!
//! The table never owns row data or fetch logic. The owner passes a
//! [`PaginationState`] snapshot down and receives a [`PageChange`] back when
//! the user asks for another page; clamping and refetching are the owner's job.

/// Snapshot of externally-owned pagination state for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    /// Zero-based page index.
    pub page_index: usize,
    /// Rows per page. Must be at least 1; zero is treated as 1.
    pub page_size: usize,
    /// Server-reported total row count across all pages.
    pub total_rows: usize,
}

/// Navigation intent reported back to the owner. Carries the requested page
/// index and the unchanged page size; the owner fetches and re-renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageChange {
    pub page_index: usize,
    pub page_size: usize,
}

impl PaginationState {
    fn size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Total pages: `ceil(total_rows / page_size)`, never less than 1.
    pub fn page_count(&self) -> usize {
        self.total_rows.div_ceil(self.size()).max(1)
    }

    /// One-based index of the first row on the current page.
    pub fn first_row(&self) -> usize {
        self.page_index * self.size() + 1
    }

    /// One-based index of the last row on the current page, capped at the total.
    pub fn last_row(&self) -> usize {
        ((self.page_index + 1) * self.size()).min(self.total_rows)
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    /// The change a "Previous" click should emit, or `None` when on the first page.
    pub fn prev(&self) -> Option<PageChange> {
        self.has_prev().then(|| PageChange {
            page_index: self.page_index - 1,
            page_size: self.page_size,
        })
    }

    /// The change a "Next" click should emit, or `None` when on the last page.
    pub fn next(&self) -> Option<PageChange> {
        self.has_next().then(|| PageChange {
            page_index: self.page_index + 1,
            page_size: self.page_size,
        })
    }

    /// "Showing 1 to 10 of 25 total"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} total",
            self.first_row(),
            self.last_row(),
            self.total_rows
        )
    }

    /// "Page 1 of 3"
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count())
    }
}
