//! Favorites Page
//!
//! Saved devices, kept in sync with every other tab, plus a side by side
//! comparison of two of them.

use catalog_core::{Category, Item};
use leptos::prelude::*;

use crate::components::{spec_rows, PhoneCard};
use crate::context::use_app_context;
use crate::hooks::use_favorites;
use crate::models::Route;

/// Devices in one comparison
pub const COMPARE_SLOTS: usize = 2;

/// Toggle `id` in the comparison picker. A full picker ignores new ids.
pub fn toggle_compare(selected: &mut Vec<u32>, id: u32) {
    if let Some(pos) = selected.iter().position(|&s| s == id) {
        selected.remove(pos);
    } else if selected.len() < COMPARE_SLOTS {
        selected.push(id);
    }
}

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let ctx = use_app_context();
    let favorites = use_favorites();
    let items = Memo::new(move |_| {
        favorites.with(|ids| ctx.catalog.with_value(|catalog| catalog.select(ids)))
    });

    let (picker_open, set_picker_open) = signal(false);
    let (selected, set_selected) = signal(Vec::<u32>::new());
    let (comparing, set_comparing) = signal(None::<(u32, u32)>);

    // Unfavorited devices drop out of the picker and the comparison
    Effect::new(move |_| {
        favorites.with(|ids| {
            set_selected.update(|sel| sel.retain(|id| ids.contains(id)));
            if let Some((a, b)) = comparing.get_untracked() {
                if !ids.contains(&a) || !ids.contains(&b) {
                    set_comparing.set(None);
                }
            }
        });
    });

    let count_label = move || match items.with(Vec::len) {
        1 => "1 device saved".to_string(),
        n => format!("{} devices saved", n),
    };

    let start_compare = move |_: web_sys::MouseEvent| {
        if let [a, b] = selected.get_untracked().as_slice() {
            set_comparing.set(Some((*a, *b)));
            set_picker_open.set(false);
        }
    };

    view! {
        <main class="favorites-page">
            <nav class="breadcrumb">
                <a href=Route::Home.to_hash()>"Home"</a>
                <span class="separator">"›"</span>
                <span class="current">"Favorites"</span>
            </nav>
            <header class="favorites-header">
                <div>
                    <h1>"Favorite Devices"</h1>
                    <p class="device-count">{count_label}</p>
                </div>
                <div class="favorites-actions">
                    <a class="btn-secondary" href=Route::Listing(Category::default()).to_hash()>
                        "Add More Devices"
                    </a>
                    <button
                        class="btn-primary"
                        disabled=move || items.with(|i| i.len() < COMPARE_SLOTS)
                        on:click=move |_| set_picker_open.set(true)
                    >
                        "Compare Devices"
                    </button>
                </div>
            </header>

            <Show
                when=move || items.with(|i| !i.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <h3>"No favorite devices yet"</h3>
                        <p>
                            "Start adding devices to your favorites to compare their "
                            "specifications and make better decisions"
                        </p>
                        <button
                            class="btn-primary"
                            on:click=move |_| ctx.navigate(Route::Listing(Category::default()))
                        >
                            "Add Devices"
                        </button>
                    </div>
                }
            >
                <div class="phone-grid">
                    <For
                        each=move || items.get()
                        key=|item| item.id
                        children=|item| view! { <PhoneCard item=item /> }
                    />
                </div>
            </Show>

            <Show when=move || picker_open.get()>
                <div class="modal-backdrop" on:click=move |_| set_picker_open.set(false)>
                    <div class="modal compare-picker" on:click=|ev| ev.stop_propagation()>
                        <h3>"Compare Devices"</h3>
                        <p>"Select two devices to compare their specifications side by side"</p>
                        <div class="compare-options">
                            <For
                                each=move || items.get()
                                key=|item| item.id
                                children=move |item| {
                                    let id = item.id;
                                    let is_picked = move || selected.with(|s| s.contains(&id));
                                    let pick = move |_: web_sys::MouseEvent| {
                                        set_selected.update(|s| toggle_compare(s, id))
                                    };
                                    view! {
                                        <button
                                            class="compare-option"
                                            class:selected=is_picked
                                            on:click=pick
                                        >
                                            {item.name}
                                        </button>
                                    }
                                }
                            />
                        </div>
                        <button
                            class="btn-primary"
                            disabled=move || selected.with(|s| s.len() != COMPARE_SLOTS)
                            on:click=start_compare
                        >
                            "Compare Selected Devices"
                        </button>
                    </div>
                </div>
            </Show>

            {move || {
                let (a, b) = comparing.get()?;
                let (left, right) = ctx.catalog.with_value(|catalog| {
                    Some((catalog.get(a)?.clone(), catalog.get(b)?.clone()))
                })?;
                let close = move |_: ()| set_comparing.set(None);
                Some(view! { <CompareTable left=left right=right on_close=close /> })
            }}
        </main>
    }
}

#[component]
fn CompareTable(left: Item, right: Item, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let prefix = ctx.currency_prefix();
    let left_rows = spec_rows(&left, &prefix);
    let right_rows = spec_rows(&right, &prefix);

    // Union of labels in display order
    let mut labels: Vec<&'static str> = left_rows.iter().map(|(label, _)| *label).collect();
    for (label, _) in &right_rows {
        if !labels.contains(label) {
            labels.push(label);
        }
    }
    let lookup = |rows: &[(&'static str, String)], label: &str| {
        rows.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| "-".to_string())
    };
    let rows: Vec<_> = labels
        .into_iter()
        .map(|label| (label, lookup(&left_rows, label), lookup(&right_rows, label)))
        .collect();

    view! {
        <section class="compare-table">
            <header>
                <h2>"Comparison"</h2>
                <button
                    class="close-btn"
                    aria-label="Close comparison"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
            </header>
            <table>
                <thead>
                    <tr>
                        <th></th>
                        <th>{left.name}</th>
                        <th>{right.name}</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|(label, a, b)| {
                            let differs = a != b;
                            view! {
                                <tr class:differs=differs>
                                    <th>{label}</th>
                                    <td>{a}</td>
                                    <td>{b}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_picker_holds_two() {
        let mut selected = Vec::new();
        toggle_compare(&mut selected, 4);
        toggle_compare(&mut selected, 9);
        toggle_compare(&mut selected, 12);
        assert_eq!(selected, [4, 9]);

        toggle_compare(&mut selected, 4);
        toggle_compare(&mut selected, 12);
        assert_eq!(selected, [9, 12]);
    }
}
