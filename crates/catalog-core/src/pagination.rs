//! Pagination Splitter
//!
//! Pages are 1-indexed. An out-of-range page yields an empty slice; callers
//! reset to page 1 whenever category, query or filters change.

use tracing::debug;

use crate::config::GridConfig;

/// Which grid a page feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMode {
    /// Home page: first page only, fewer rows
    Preview,
    /// Full listing with pager
    Listing,
}

impl GridMode {
    pub fn rows(&self, grid: &GridConfig) -> usize {
        match self {
            GridMode::Preview => grid.preview_rows,
            GridMode::Listing => grid.listing_rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub slice: Vec<T>,
    pub total_pages: usize,
    pub items_per_page: usize,
}

/// `ceil(len / per_page)`, never less than 1
pub fn total_pages(len: usize, items_per_page: usize) -> usize {
    len.div_ceil(items_per_page.max(1)).max(1)
}

pub fn paginate<T: Clone>(
    items: &[T],
    page: usize,
    items_per_row: usize,
    rows_per_page: usize,
) -> Page<T> {
    let items_per_page = items_per_row.max(1) * rows_per_page.max(1);
    let total = total_pages(items.len(), items_per_page);
    let slice = if page == 0 {
        Vec::new()
    } else {
        let start = (page - 1).saturating_mul(items_per_page);
        items
            .iter()
            .skip(start)
            .take(items_per_page)
            .cloned()
            .collect()
    };
    Page { slice, total_pages: total, items_per_page }
}

/// Current page bookkeeping for a listing view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_pages: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current_page: 1, items_per_page: 1, total_pages: 1 }
    }
}

impl PageState {
    /// Refresh page count after the filtered set or viewport changed,
    /// pulling the current page back into range
    pub fn recompute(&mut self, len: usize, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.total_pages = total_pages(len, self.items_per_page);
        if self.current_page > self.total_pages {
            debug!("[PAGE] Clamping page {} to {}", self.current_page, self.total_pages);
            self.current_page = self.total_pages;
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages);
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Compact pager: every page when there are at most five, otherwise the
/// first and last page with a window around the current one.
pub fn page_window(current: usize, total: usize) -> Vec<PageLink> {
    const MAX_VISIBLE: usize = 5;
    use PageLink::{Ellipsis, Page};

    if total <= MAX_VISIBLE {
        return (1..=total).map(Page).collect();
    }
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![Page(1), Ellipsis, Page(total - 3), Page(total - 2), Page(total - 1), Page(total)]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}
