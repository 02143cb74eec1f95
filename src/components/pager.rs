//! Pager Component
//!
//! Previous/next arrows around a compact page window with ellipses.

use catalog_core::{page_window, PageLink};
use leptos::prelude::*;

#[component]
pub fn Pager(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] on_page_change: Callback<usize>,
) -> impl IntoView {
    let links = move || page_window(current_page.get(), total_pages.get());

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pager">
                <button
                    class="pager-arrow"
                    aria-label="Previous page"
                    disabled=move || { current_page.get() <= 1 }
                    on:click=move |_| {
                        let prev = current_page.get_untracked().saturating_sub(1).max(1);
                        on_page_change.run(prev)
                    }
                >
                    "←"
                </button>
                {move || {
                    links()
                        .into_iter()
                        .map(|link| match link {
                            PageLink::Ellipsis => {
                                view! { <span class="pager-ellipsis">"..."</span> }.into_any()
                            }
                            PageLink::Page(page) => view! {
                                <button
                                    class="pager-page"
                                    class:active=move || current_page.get() == page
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page}
                                </button>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pager-arrow"
                    aria-label="Next page"
                    disabled=move || { current_page.get() >= total_pages.get() }
                    on:click=move |_| {
                        let last = total_pages.get_untracked();
                        let next = (current_page.get_untracked() + 1).min(last);
                        on_page_change.run(next)
                    }
                >
                    "→"
                </button>
            </nav>
        </Show>
    }
}
