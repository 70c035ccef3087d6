#![forbid(unsafe_code)]

//! Page bookkeeping for client- and server-side pagination.

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

/// Where rows are paged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PaginationMode {
    /// All rows are loaded and sliced locally.
    #[default]
    Client,
    /// The host fetches one page at a time and reports the total.
    Server,
}

/// Pagination settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PaginationConfig {
    pub enabled: bool,
    pub mode: PaginationMode,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub initial_page_index: usize,
    /// Total row count reported by the server in [`PaginationMode::Server`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub server_total_rows: Option<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: PaginationMode::Client,
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            initial_page_index: 0,
            server_total_rows: None,
        }
    }
}

impl PaginationConfig {
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    #[must_use]
    pub fn with_initial_page_index(mut self, index: usize) -> Self {
        self.initial_page_index = index;
        self
    }

    /// Switch to server mode with the given total.
    #[must_use]
    pub fn server(mut self, total_rows: usize) -> Self {
        self.mode = PaginationMode::Server;
        self.server_total_rows = Some(total_rows);
        self
    }

    /// Rows to paginate over.
    ///
    /// In server mode this is the reported total, or `loaded_rows` when the
    /// server has not reported one yet.
    #[must_use]
    pub fn total_rows(&self, loaded_rows: usize) -> usize {
        match self.mode {
            PaginationMode::Client => loaded_rows,
            PaginationMode::Server => self.server_total_rows.unwrap_or(loaded_rows),
        }
    }

    #[must_use]
    pub fn initial_state(&self) -> PaginationState {
        PaginationState::new(self.initial_page_index, self.page_size)
    }
}

/// Current page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl PaginationState {
    /// A zero page size is treated as one row per page.
    #[must_use]
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn page_count(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size.max(1))
    }

    #[must_use]
    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    #[must_use]
    pub fn can_next(&self, total_rows: usize) -> bool {
        self.page_index < self.page_count(total_rows).saturating_sub(1)
    }

    /// Go back one page. Returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// Advance one page. Returns whether the page changed.
    pub fn next(&mut self, total_rows: usize) -> bool {
        if !self.can_next(total_rows) {
            return false;
        }
        self.page_index += 1;
        true
    }

    pub fn first(&mut self) {
        self.page_index = 0;
    }

    pub fn last(&mut self, total_rows: usize) {
        self.page_index = self.page_count(total_rows).saturating_sub(1);
    }

    /// Jump to `index`, clamped to the last page.
    pub fn set_page_index(&mut self, index: usize, total_rows: usize) {
        self.page_index = index.min(self.page_count(total_rows).saturating_sub(1));
    }

    /// Change the page size, keeping the current first row on screen.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        let top_row = self.page_index.saturating_mul(self.page_size.max(1));
        self.page_size = page_size;
        self.page_index = top_row / page_size;
    }

    /// Row indices on the current page.
    #[must_use]
    pub fn row_range(&self, total_rows: usize) -> Range<usize> {
        let start = self
            .page_index
            .saturating_mul(self.page_size)
            .min(total_rows);
        let end = start.saturating_add(self.page_size).min(total_rows);
        start..end
    }

    /// Rows of a fully loaded data set on the current page.
    #[must_use]
    pub fn page_rows<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        &rows[self.row_range(rows.len())]
    }
}
