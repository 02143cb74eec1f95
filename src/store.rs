//! Browse State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every helper that
//! changes what the grid shows (category, query, filters) also sends the
//! listing back to page 1.

use catalog_core::{Category, FilterKey, FilterState, PriceRange, SortStrategy};
use leptos::prelude::*;
use reactive_stores::Store;
use tracing::debug;

/// Shared browse state for the home preview and the full listing
#[derive(Clone, Debug, Default, Store)]
pub struct BrowseState {
    pub category: Category,
    /// Live search text, applied on every keystroke
    pub query: String,
    pub filters: FilterState,
    /// `None` keeps catalog order
    pub sort: Option<SortStrategy>,
    /// 1-based page of the full listing
    pub current_page: usize,
}

impl BrowseState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BrowseStore = Store<BrowseState>;

/// Get the browse store from context
pub fn use_browse_store() -> BrowseStore {
    expect_context::<BrowseStore>()
}

// ========================
// Store Helper Functions
// ========================

fn reset_page(store: &BrowseStore) {
    if store.current_page().get_untracked() != 1 {
        store.current_page().set(1);
    }
}

pub fn store_set_category(store: &BrowseStore, category: Category) {
    if store.category().get_untracked() != category {
        debug!("[STORE] Category -> {}", category.label());
        store.category().set(category);
        reset_page(store);
    }
}

pub fn store_set_query(store: &BrowseStore, query: String) {
    store.query().set(query);
    reset_page(store);
}

pub fn store_select_filter(store: &BrowseStore, key: FilterKey, value: &str) {
    store.filters().write().select_option(key, value);
    reset_page(store);
}

pub fn store_set_price_range(store: &BrowseStore, lo: u32, hi: u32) {
    store.filters().write().set_range(FilterKey::PriceRange, PriceRange::new(lo, hi));
    reset_page(store);
}

pub fn store_remove_filter(store: &BrowseStore, key: FilterKey) {
    store.filters().write().remove(key);
    reset_page(store);
}

pub fn store_clear_filters(store: &BrowseStore) {
    store.filters().write().clear();
    reset_page(store);
}

/// Reordering keeps the result set, so the page stays where it is
pub fn store_set_sort(store: &BrowseStore, sort: Option<SortStrategy>) {
    store.sort().set(sort);
}

/// Clamped by the caller against the current page count
pub fn store_go_to_page(store: &BrowseStore, page: usize) {
    debug!("[STORE] Page -> {}", page);
    store.current_page().set(page.max(1));
}
