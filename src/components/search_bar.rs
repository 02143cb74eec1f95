//! Search Bar Component
//!
//! Live search input with a dropdown of recent and trending searches.
//! Holding a recent entry for half a second reveals its remove button.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::hooks::use_recent_searches;
use crate::store::{store_set_query, use_browse_store, BrowseStateStoreFields};

const TRENDING_SEARCHES: [&str; 4] =
    ["iPhone 15 Pro", "Galaxy S24 Ultra", "Pixel 8 Pro", "OnePlus 12"];

const LONG_PRESS_MS: u32 = 500;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browse_store();
    let recents = use_recent_searches();

    let (is_focused, set_is_focused) = signal(false);
    let (long_pressed, set_long_pressed) = signal(None::<usize>);
    // Dropping the pending timeout cancels it
    let press_timer = StoredValue::new_local(None::<Timeout>);
    let root_ref = NodeRef::<html::Div>::new();

    let close = move || {
        set_is_focused.set(false);
        set_long_pressed.set(None);
    };

    // Commit a search: apply it and remember it
    let submit = move |query: String| {
        if query.trim().is_empty() {
            return;
        }
        debug!("[SEARCH] Submit {:?}", query);
        store_set_query(&store, query.clone());
        ctx.persistence().recents.add(&query);
        close();
    };

    let press_start = move |index: usize| {
        let timer = Timeout::new(LONG_PRESS_MS, move || set_long_pressed.set(Some(index)));
        press_timer.set_value(Some(timer));
    };
    let press_end = move || press_timer.set_value(None);

    let outside = window_event_listener(ev::mousedown, move |ev| {
        if !is_focused.get_untracked() {
            return;
        }
        let Some(root) = root_ref.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !root.contains(target.as_ref()) {
            close();
        }
    });
    on_cleanup(move || outside.remove());

    view! {
        <div class="search-bar" node_ref=root_ref>
            <div class="search-input-wrap">
                <span class="search-icon">"⌕"</span>
                <input
                    type="text"
                    placeholder="Search phones, brands, features..."
                    prop:value=move || store.query().get()
                    on:input=move |ev| store_set_query(&store, event_target_value(&ev))
                    on:focus=move |_| set_is_focused.set(true)
                    on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => submit(store.query().get_untracked()),
                        "Escape" => close(),
                        _ => {}
                    }
                />
                <Show when=move || store.query().with(|q| !q.is_empty())>
                    <button
                        class="search-clear"
                        aria-label="Clear search"
                        on:click=move |_| store_set_query(&store, String::new())
                    >
                        "×"
                    </button>
                </Show>
            </div>

            <Show when=move || is_focused.get()>
                <div class="search-dropdown">
                    <Show when=move || recents.with(|r| !r.is_empty())>
                        <div class="search-section">
                            <div class="search-section-header">
                                <span>"Recent Searches"</span>
                                <button
                                    class="search-clear-recent"
                                    aria-label="Clear recent searches"
                                    on:click=move |_| {
                                        ctx.persistence().recents.clear();
                                        set_long_pressed.set(None);
                                    }
                                >
                                    "🗑"
                                </button>
                            </div>
                            <For
                                each=move || recents.get().into_iter().enumerate()
                                key=|(index, query)| (*index, query.clone())
                                children=move |(index, query)| {
                                    let apply = query.clone();
                                    let remove = query.clone();
                                    let is_pressed = move || long_pressed.get() == Some(index);
                                    let remove_entry = move |_: web_sys::MouseEvent| {
                                        ctx.persistence().recents.remove(&remove);
                                        set_long_pressed.set(None);
                                    };
                                    view! {
                                        <div
                                            class="recent-search"
                                            class:pressed=is_pressed
                                            on:touchstart=move |_| press_start(index)
                                            on:touchend=move |_| press_end()
                                            on:touchcancel=move |_| press_end()
                                            on:mousedown=move |_| press_start(index)
                                            on:mouseup=move |_| press_end()
                                            on:mouseleave=move |_| press_end()
                                        >
                                            <button class="recent-search-text" on:click=move |_| {
                                                if long_pressed.get_untracked().is_none() {
                                                    submit(apply.clone());
                                                }
                                            }>
                                                {query}
                                            </button>
                                            <Show when=is_pressed>
                                                <button
                                                    class="recent-search-remove"
                                                    aria-label="Remove search"
                                                    on:click=remove_entry.clone()
                                                >
                                                    "×"
                                                </button>
                                            </Show>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>

                    <div class="search-section">
                        <div class="search-section-header">
                            <span>"Trending Searches"</span>
                        </div>
                        <div class="trending-chips">
                            {TRENDING_SEARCHES
                                .into_iter()
                                .map(|trend| {
                                    view! {
                                        <button
                                            class="trending-chip"
                                            on:click=move |_| submit(trend.to_string())
                                        >
                                            {trend}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
