//! Category Bar Component
//!
//! Category tabs with item counts. The listing page also shows the filter
//! and sort controls on the same row.

use catalog_core::Category;
use leptos::prelude::*;

use crate::components::{FilterDropdown, SortMenu};
use crate::context::use_app_context;
use crate::store::{store_set_category, use_browse_store, BrowseStateStoreFields};

#[component]
pub fn CategoryBar(
    /// Show the filter and sort controls
    #[prop(optional)]
    controls: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browse_store();

    view! {
        <div class="category-bar">
            <div class="category-tabs">
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        let count = ctx.catalog.with_value(|catalog| catalog.count_in(category));
                        view! {
                            <button
                                class="category-tab"
                                class:active=move || store.category().get() == category
                                on:click=move |_| store_set_category(&store, category)
                            >
                                <span class="category-name">{category.label()}</span>
                                <span class="category-count">{format!("{} devices", count)}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || controls>
                <div class="category-controls">
                    <FilterDropdown />
                    <SortMenu />
                </div>
            </Show>
        </div>
    }
}
