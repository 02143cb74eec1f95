//! Listing Page
//!
//! Full paginated listing for one category. The category in the hash and
//! the category in the browse store follow each other.

use leptos::prelude::*;

use catalog_core::{Category, GridMode};

use crate::components::{CategoryBar, PhoneGrid, SearchBar};
use crate::context::use_app_context;
use crate::hooks::use_filtered_items;
use crate::models::Route;
use crate::store::{store_set_category, use_browse_store, BrowseStateStoreFields};

#[component]
pub fn ListingPage(category: Category) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browse_store();
    let items = use_filtered_items();

    store_set_category(&store, category);

    // Hash -> store, for back/forward and typed URLs
    Effect::new(move |_| {
        if let Route::Listing(category) = ctx.route.get() {
            store_set_category(&store, category);
        }
    });

    // Store -> hash, when a category tab is clicked
    Effect::new(move |_| {
        let category = store.category().get();
        if matches!(ctx.route.get_untracked(), Route::Listing(_)) {
            ctx.navigate(Route::Listing(category));
        }
    });

    let count = move || items.with(Vec::len);

    view! {
        <main class="listing-page">
            <nav class="breadcrumb">
                <a href=Route::Home.to_hash()>"Home"</a>
                <span class="separator">"›"</span>
                <span>"Mobile Phones"</span>
                <span class="separator">"›"</span>
                <span class="current">{move || store.category().get().label()}</span>
            </nav>
            <header class="listing-header">
                <h1>{move || store.category().get().label()}</h1>
                <span class="device-count">
                    {move || match count() {
                        1 => "1 device".to_string(),
                        n => format!("{} devices", n),
                    }}
                </span>
            </header>
            <SearchBar />
            <CategoryBar controls=true />
            <PhoneGrid items=items mode=GridMode::Listing />
        </main>
    }
}
