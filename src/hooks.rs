//! Persistence Hooks
//!
//! Reactive views over favorites and recent searches. Each hook subscribes
//! to the change notifier, re-reads storage whenever its key changes and
//! unsubscribes when the owning component is cleaned up. The browse result
//! memo lives here too since every grid reads it.

use std::collections::BTreeSet;
use std::rc::Rc;

use catalog_core::{filter_items, Item};
use leptos::prelude::*;

use crate::context::{use_app_context, Persistence};
use crate::store::{use_browse_store, BrowseStateStoreFields};

fn watch_key<T, K, R>(key_of: K, read: R) -> ReadSignal<T>
where
    T: Send + Sync + 'static,
    K: Fn(&Persistence) -> &str,
    R: Fn(&Persistence) -> T + 'static,
{
    let ctx = use_app_context();
    let persistence = ctx.persistence();
    let key = key_of(&persistence).to_string();
    let (value, set_value) = signal(read(&persistence));

    let reader = persistence.clone();
    let subscription = persistence.notifier.subscribe(Rc::new(move |changed: &str| {
        if changed == key {
            let _ = set_value.try_set(read(&reader));
        }
    }));
    on_cleanup(move || {
        ctx.persistence().notifier.unsubscribe(subscription);
    });
    value
}

/// All favorited ids
pub fn use_favorites() -> ReadSignal<BTreeSet<u32>> {
    watch_key(|p| p.favorites.key(), |p| p.favorites.get_favorites())
}

/// Favorite status of one item
pub fn use_is_favorite(id: u32) -> ReadSignal<bool> {
    watch_key(|p| p.favorites.key(), move |p| p.favorites.is_favorite(id))
}

pub fn use_recent_searches() -> ReadSignal<Vec<String>> {
    watch_key(|p| p.recents.key(), |p| p.recents.get())
}

/// Current category, query, filters and sort applied to the catalog
pub fn use_filtered_items() -> Memo<Vec<Item>> {
    let ctx = use_app_context();
    let store = use_browse_store();
    Memo::new(move |_| {
        let category = store.category().get();
        store.query().with(|query| {
            store.filters().with(|filters| {
                store.sort().with(|sort| {
                    ctx.catalog.with_value(|catalog| {
                        filter_items(catalog.items(), category, query, filters, sort.as_ref())
                    })
                })
            })
        })
    })
}
