//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use catalog_core::{Catalog, CatalogConfig, ChangeNotifier, Favorites, RecentSearches};
use leptos::prelude::*;

use crate::models::Route;
use crate::storage::BrowserStorage;

/// Favorites and recent searches over browser storage, created once at
/// startup and shared by every view
#[derive(Clone)]
pub struct Persistence {
    pub favorites: Favorites<BrowserStorage>,
    pub recents: RecentSearches<BrowserStorage>,
    pub notifier: Rc<ChangeNotifier>,
}

impl Persistence {
    pub fn new(config: &CatalogConfig) -> Self {
        let store = Rc::new(BrowserStorage::new());
        let notifier = Rc::new(ChangeNotifier::new());
        let keys = &config.storage_keys;
        Self {
            favorites: Favorites::new(
                Rc::clone(&store),
                Rc::clone(&notifier),
                keys.favorites.clone(),
            ),
            recents: RecentSearches::new(
                store,
                Rc::clone(&notifier),
                keys.recent_searches.clone(),
                config.recent_searches_cap,
            ),
            notifier,
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub catalog: StoredValue<Catalog>,
    pub config: StoredValue<CatalogConfig>,
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    /// Window width in CSS pixels
    pub viewport_width: ReadSignal<u32>,
    persistence: StoredValue<Persistence, LocalStorage>,
}

impl AppContext {
    pub fn new(
        catalog: Catalog,
        config: CatalogConfig,
        route: (ReadSignal<Route>, WriteSignal<Route>),
        viewport_width: ReadSignal<u32>,
        persistence: Persistence,
    ) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
            config: StoredValue::new(config),
            route: route.0,
            set_route: route.1,
            viewport_width,
            persistence: StoredValue::new_local(persistence),
        }
    }

    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    /// Cheap clone of the shared stores; holds no borrow
    pub fn persistence(&self) -> Persistence {
        self.persistence.get_value()
    }

    /// Flip favorite status; every watcher refreshes through the notifier
    pub fn toggle_favorite(&self, id: u32) -> bool {
        self.persistence().favorites.toggle(id)
    }

    pub fn items_per_row(&self) -> usize {
        let width = self.viewport_width.get();
        self.config.with_value(|config| config.grid.items_per_row(width))
    }

    pub fn currency_prefix(&self) -> String {
        self.config.with_value(|config| config.currency_prefix.clone())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
