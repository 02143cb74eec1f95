//! Phone Catalog App
//!
//! Loads the bundled catalog and config, provides the shared context and
//! switches pages on the `#/...` location hash.

use catalog_core::{Catalog, CatalogConfig};
use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::{FavoritesPage, HomePage, ListingPage, Navbar, PhoneDetail};
use crate::context::{AppContext, Persistence};
use crate::models::Route;
use crate::storage::bind_storage_events;
use crate::store::BrowseState;
use crate::viewport::create_viewport_width;

const CONFIG_JSON: &str = include_str!("../config/catalog.json");
const CATALOG_JSON: &str = include_str!("../data/phones.json");

fn load_config() -> CatalogConfig {
    CatalogConfig::from_json_str(CONFIG_JSON).unwrap_or_else(|e| {
        warn!("[APP] Bad catalog config, using defaults: {}", e);
        CatalogConfig::default()
    })
}

fn load_catalog() -> Catalog {
    match Catalog::from_json_str(CATALOG_JSON) {
        Ok(catalog) => {
            info!("[APP] Loaded {} phones", catalog.len());
            catalog
        }
        Err(e) => {
            error!("[APP] Failed to load catalog: {}", e);
            Catalog::default()
        }
    }
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|win| win.location().hash().ok())
        .unwrap_or_default()
}

/// Page identity; a category switch on the listing is not a new page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Listing,
    Detail(u32),
    Favorites,
}

impl From<Route> for Page {
    fn from(route: Route) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::Listing(_) => Page::Listing,
            Route::Detail(id) => Page::Detail(id),
            Route::Favorites => Page::Favorites,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let catalog = load_catalog();

    let persistence = Persistence::new(&config);
    bind_storage_events(
        persistence.notifier.clone(),
        vec![
            config.storage_keys.favorites.clone(),
            config.storage_keys.recent_searches.clone(),
        ],
    );

    let (route, set_route) = signal(Route::from_hash(&current_hash()));
    let viewport_width = create_viewport_width();
    let ctx = AppContext::new(catalog, config, (route, set_route), viewport_width, persistence);
    provide_context(ctx);
    provide_context(Store::new(BrowseState::new()));

    // Route -> hash
    Effect::new(move |_| {
        let hash = route.get().to_hash();
        if let Some(win) = web_sys::window() {
            let location = win.location();
            if location.hash().ok().as_deref() != Some(hash.as_str()) {
                let _ = location.set_hash(&hash);
            }
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    // Hash -> route, for back/forward and typed URLs
    let on_hash_change = Closure::<dyn FnMut()>::new(move || {
        ctx.navigate(Route::from_hash(&current_hash()));
    });
    if let Some(win) = web_sys::window() {
        let callback = on_hash_change.as_ref().unchecked_ref();
        let _ = win.add_event_listener_with_callback("hashchange", callback);
    }
    on_hash_change.forget();

    let page = Memo::new(move |_| Page::from(route.get()));

    view! {
        <div class="app-layout">
            <Navbar />
            {move || match page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Listing => {
                    let category = match route.get_untracked() {
                        Route::Listing(category) => category,
                        _ => Default::default(),
                    };
                    view! { <ListingPage category=category /> }.into_any()
                }
                Page::Detail(id) => view! { <PhoneDetail id=id /> }.into_any(),
                Page::Favorites => view! { <FavoritesPage /> }.into_any(),
            }}
        </div>
    }
}
