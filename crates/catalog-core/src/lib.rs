//! Phone Catalog Core
//!
//! Host-independent browsing logic for the storefront: the item model,
//! the read-only catalog, filtering and sorting, pagination, and the
//! favorites/recent-search stores behind a persistence port.

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod format;
pub mod item;
pub mod pagination;
pub mod recents;
pub mod sort;
pub mod storage;

pub use catalog::Catalog;
pub use config::{Breakpoint, CatalogConfig, GridConfig, PriceBounds, StorageKeys};
pub use error::{CatalogError, ConfigError, StoreError, StoreResult};
pub use favorites::Favorites;
pub use filter::{
    filter_definitions, filter_items, FilterChoice, FilterDefinition, FilterKey, FilterKind,
    FilterState, FilterValue, OptionMatch, PriceRange,
};
pub use format::{format_price, parse_price};
pub use item::{Category, Item, Specs};
pub use pagination::{page_window, paginate, total_pages, GridMode, Page, PageLink, PageState};
pub use recents::RecentSearches;
pub use sort::{composite_scores, sort_items, SortSpec, SortStrategy};
pub use storage::{ChangeNotifier, KeyValueStore, MemoryStore, Subscription};
