//! Phone Grid Component
//!
//! Responsive grid over an already filtered and sorted sequence. The
//! preview grid shows only the first page; the listing grid adds a pager
//! driven by the browse store.

use catalog_core::{paginate, GridMode, Item, PageState};
use leptos::prelude::*;

use crate::components::{Pager, PhoneCard};
use crate::context::use_app_context;
use crate::models::Route;
use crate::store::{store_go_to_page, use_browse_store, BrowseStateStoreFields};

#[component]
pub fn PhoneGrid(#[prop(into)] items: Signal<Vec<Item>>, mode: GridMode) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browse_store();
    let rows = ctx.config.with_value(|config| mode.rows(&config.grid));

    let requested_page = move || match mode {
        GridMode::Preview => 1,
        GridMode::Listing => store.current_page().get(),
    };

    let page = Memo::new(move |_| {
        let per_row = ctx.items_per_row();
        items.with(|all| paginate(all, requested_page(), per_row, rows))
    });

    // A wider viewport or a smaller result set can leave the listing past
    // its last page; pull it back before the pager reads it
    Effect::new(move |_| {
        if mode != GridMode::Listing {
            return;
        }
        let current = store.current_page().get();
        let mut state = PageState { current_page: current, ..PageState::default() };
        state.recompute(items.with(Vec::len), page.with(|p| p.items_per_page));
        if state.current_page != current {
            store_go_to_page(&store, state.current_page);
        }
    });

    let total_pages = Signal::derive(move || page.with(|p| p.total_pages));
    let current_page = Signal::derive(requested_page);

    view! {
        <div class="phone-grid-section">
            <Show
                when=move || items.with(|all| !all.is_empty())
                fallback=|| view! { <div class="empty-state">"No phones match your search"</div> }
            >
                <div class="phone-grid" style=move || format!("--columns: {}", ctx.items_per_row())>
                    <For
                        each=move || page.get().slice
                        key=|item| item.id
                        children=|item| view! { <PhoneCard item=item /> }
                    />
                </div>
            </Show>
            {match mode {
                GridMode::Listing => view! {
                    <Pager
                        current_page=current_page
                        total_pages=total_pages
                        on_page_change=move |p: usize| store_go_to_page(&store, p)
                    />
                }
                .into_any(),
                GridMode::Preview => view! {
                    <Show when=move || { total_pages.get() > 1 }>
                        <button
                            class="view-all-btn"
                            on:click=move |_| {
                                ctx.navigate(Route::Listing(store.category().get_untracked()))
                            }
                        >
                            "View all"
                        </button>
                    </Show>
                }
                .into_any(),
            }}
        </div>
    }
}
