//! Sort Menu Component
//!
//! Sort options grouped under Price / Release Date / Popularity. In blend
//! mode several criteria (one per group) combine into a weighted sort.

use catalog_core::{SortSpec, SortStrategy};
use leptos::prelude::*;

use crate::store::{store_set_sort, use_browse_store, BrowseStateStoreFields};

const GROUPS: [&str; 3] = ["Price", "Release Date", "Popularity"];

/// Strategy after clicking `spec`. Clicking the active simple option clears
/// the sort. In blend mode the option toggles, replacing any other option
/// from its group.
pub fn next_strategy(
    current: Option<&SortStrategy>,
    spec: SortSpec,
    blend: bool,
) -> Option<SortStrategy> {
    if !blend {
        return match current {
            Some(SortStrategy::Simple(active)) if *active == spec => None,
            _ => Some(SortStrategy::Simple(spec)),
        };
    }
    let mut criteria = match current {
        Some(SortStrategy::Weighted(criteria)) => criteria.clone(),
        Some(SortStrategy::Simple(active)) => vec![*active],
        None => Vec::new(),
    };
    if criteria.contains(&spec) {
        criteria.retain(|s| *s != spec);
    } else {
        criteria.retain(|s| s.group() != spec.group());
        criteria.push(spec);
    }
    if criteria.is_empty() {
        None
    } else {
        Some(SortStrategy::Weighted(criteria))
    }
}

/// Carry the current selection across a blend mode switch
pub fn switch_mode(current: Option<&SortStrategy>, blend: bool) -> Option<SortStrategy> {
    match (current, blend) {
        (Some(SortStrategy::Simple(spec)), true) => Some(SortStrategy::Weighted(vec![*spec])),
        (Some(SortStrategy::Weighted(criteria)), false) => {
            criteria.first().copied().map(SortStrategy::Simple)
        }
        (other, _) => other.cloned(),
    }
}

fn is_active(current: Option<&SortStrategy>, spec: SortSpec) -> bool {
    match current {
        Some(SortStrategy::Simple(active)) => *active == spec,
        Some(SortStrategy::Weighted(criteria)) => criteria.contains(&spec),
        None => false,
    }
}

#[component]
pub fn SortMenu() -> impl IntoView {
    let store = use_browse_store();
    let (is_open, set_is_open) = signal(false);
    let blend =
        Signal::derive(move || matches!(store.sort().get(), Some(SortStrategy::Weighted(_))));
    let (blend_mode, set_blend_mode) = signal(blend.get_untracked());

    let choose = move |spec: SortSpec| {
        let blend = blend_mode.get_untracked();
        let next = store.sort().with_untracked(|sort| next_strategy(sort.as_ref(), spec, blend));
        store_set_sort(&store, next);
    };

    let toggle_blend = move |_: web_sys::Event| {
        let on = !blend_mode.get_untracked();
        set_blend_mode.set(on);
        let next = store.sort().with_untracked(|sort| switch_mode(sort.as_ref(), on));
        store_set_sort(&store, next);
    };

    view! {
        <div class="sort-menu">
            <button
                class="sort-btn"
                class:active=move || store.sort().with(Option::is_some)
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                "Sort"
                <span class="chevron" class:open=move || is_open.get()>"▾"</span>
            </button>
            <Show when=move || is_open.get()>
                <div class="sort-dropdown">
                    <label class="blend-toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || blend_mode.get()
                            on:change=toggle_blend
                        />
                        "Blend criteria"
                    </label>
                    {GROUPS
                        .iter()
                        .map(|&group| {
                            view! {
                                <div class="sort-group">
                                    <h4>{group}</h4>
                                    {SortSpec::ALL
                                        .into_iter()
                                        .filter(|spec| spec.group() == group)
                                        .map(|spec| {
                                            let selected = move || {
                                                store.sort().with(|s| is_active(s.as_ref(), spec))
                                            };
                                            view! {
                                                <button
                                                    class="sort-option"
                                                    class:selected=selected
                                                    on:click=move |_| choose(spec)
                                                >
                                                    {spec.label()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                    <Show when=move || blend.get()>
                        <p class="sort-hint">
                            "Phones are ranked by the average of the selected criteria"
                        </p>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_click_toggles_off() {
        let current = SortStrategy::Simple(SortSpec::Newest);
        assert_eq!(next_strategy(Some(&current), SortSpec::Newest, false), None);
        assert_eq!(
            next_strategy(Some(&current), SortSpec::Trending, false),
            Some(SortStrategy::Simple(SortSpec::Trending))
        );
    }

    #[test]
    fn test_blend_replaces_within_group() {
        let current = SortStrategy::Weighted(vec![SortSpec::PriceLowToHigh, SortSpec::Newest]);
        assert_eq!(
            next_strategy(Some(&current), SortSpec::PriceHighToLow, true),
            Some(SortStrategy::Weighted(vec![SortSpec::Newest, SortSpec::PriceHighToLow]))
        );
        let single = SortStrategy::Weighted(vec![SortSpec::MostViewed]);
        assert_eq!(next_strategy(Some(&single), SortSpec::MostViewed, true), None);
    }

    #[test]
    fn test_switch_mode_keeps_selection() {
        let simple = SortStrategy::Simple(SortSpec::Oldest);
        assert_eq!(
            switch_mode(Some(&simple), true),
            Some(SortStrategy::Weighted(vec![SortSpec::Oldest]))
        );
        let weighted = SortStrategy::Weighted(vec![SortSpec::Trending, SortSpec::PriceLowToHigh]);
        assert_eq!(
            switch_mode(Some(&weighted), false),
            Some(SortStrategy::Simple(SortSpec::Trending))
        );
        assert_eq!(switch_mode(None, true), None);
    }
}
