//! Home Page
//!
//! Search, category tabs and a one-page preview of the current category.

use catalog_core::GridMode;
use leptos::prelude::*;

use crate::components::{CategoryBar, PhoneGrid, SearchBar};
use crate::hooks::use_filtered_items;
use crate::store::{use_browse_store, BrowseStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_browse_store();
    let items = use_filtered_items();

    view! {
        <main class="home-page">
            <SearchBar />
            <section class="home-catalog">
                <h2 class="section-title">{move || store.category().get().label()}</h2>
                <CategoryBar />
                <PhoneGrid items=items mode=GridMode::Preview />
            </section>
        </main>
    }
}
