//! Filter Dropdown Component
//!
//! One collapsible section per filter key: option lists for brand and specs,
//! a two-handle slider for price.

use catalog_core::{filter_definitions, format_price, FilterDefinition, FilterKey, FilterKind};
use leptos::prelude::*;
use leptos_range_slider::{CommitMode, RangeSlider};

use crate::context::use_app_context;
use crate::store::{
    store_clear_filters, store_remove_filter, store_select_filter, store_set_price_range,
    use_browse_store, BrowseStateStoreFields,
};

#[component]
pub fn FilterDropdown() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browse_store();
    let (is_open, set_is_open) = signal(false);
    let (expanded, set_expanded) = signal(None::<FilterKey>);

    let definitions = ctx
        .catalog
        .with_value(|catalog| ctx.config.with_value(|config| filter_definitions(catalog, config)));
    let active_count = Memo::new(move |_| store.filters().with(|f| f.active_count()));

    view! {
        <div class="filter-dropdown">
            <button
                class="filter-btn"
                class:active=move || { active_count.get() > 0 }
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                "Filter"
                <Show when=move || { active_count.get() > 0 }>
                    <span class="filter-count">{move || active_count.get()}</span>
                </Show>
                <span class="chevron" class:open=move || is_open.get()>"▾"</span>
            </button>
            <Show when=move || is_open.get()>
                <div class="filter-panel">
                    {definitions
                        .iter()
                        .cloned()
                        .map(|def| {
                            view! {
                                <FilterSection
                                    def=def
                                    expanded=expanded
                                    set_expanded=set_expanded
                                />
                            }
                        })
                        .collect_view()}
                    <div class="filter-actions">
                        <button
                            class="clear-filters"
                            disabled=move || active_count.get() == 0
                            on:click=move |_| store_clear_filters(&store)
                        >
                            "Clear all"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FilterSection(
    def: FilterDefinition,
    expanded: ReadSignal<Option<FilterKey>>,
    set_expanded: WriteSignal<Option<FilterKey>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browse_store();
    let key = def.key;
    let prefix = ctx.currency_prefix();
    let is_expanded = move || expanded.get() == Some(key);
    let toggle_section = move |_: web_sys::MouseEvent| {
        set_expanded.update(|open| *open = if *open == Some(key) { None } else { Some(key) })
    };

    let summary_def = def.clone();
    let summary = move || store.filters().with(|f| summary_def.describe(f, &prefix));

    let body = match (key.kind(), def.bounds) {
        (FilterKind::Range, Some(bounds)) => view! {
            <PriceSlider key=key min=bounds.min max=bounds.max step=bounds.step />
        }
        .into_any(),
        _ => def
            .options
            .iter()
            .cloned()
            .map(|choice| {
                let value = choice.value.clone();
                let selected = {
                    let value = value.clone();
                    move || store.filters().with(|f| f.is_selected(key, &value))
                };
                view! {
                    <button
                        class="filter-option"
                        class:selected=selected
                        on:click=move |_| store_select_filter(&store, key, &value)
                    >
                        <span class="check"></span>
                        <span>{choice.label}</span>
                    </button>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="filter-section">
            <button
                class="filter-section-header"
                on:click=toggle_section
            >
                <span class="filter-label">{key.label()}</span>
                {move || summary().map(|text| view! { <span class="filter-summary">{text}</span> })}
                <span class="chevron" class:open=is_expanded>"▾"</span>
            </button>
            <div class="filter-options" class:hidden=move || !is_expanded()>
                {body}
            </div>
        </div>
    }
}

/// Price range slider; dragging back to the full span removes the filter
#[component]
fn PriceSlider(key: FilterKey, min: u32, max: u32, step: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browse_store();
    let prefix = ctx.currency_prefix();
    let mode = if ctx.config.with_value(|config| config.live_price_updates) {
        CommitMode::Continuous
    } else {
        CommitMode::OnRelease
    };

    let value = Signal::derive(move || {
        store
            .filters()
            .with(|f| f.range(key))
            .map(|range| (range.min, range.max))
            .unwrap_or((min, max))
    });

    let on_change = move |(lo, hi): (u32, u32)| {
        if lo <= min && hi >= max {
            store_remove_filter(&store, key);
        } else {
            store_set_price_range(&store, lo, hi);
        }
    };

    view! {
        <RangeSlider
            min=min
            max=max
            step=step
            value=value
            on_change=on_change
            format=move |v: u32| format_price(&prefix, v)
            mode=mode
        />
    }
}
