//! Favorites Store
//!
//! Set of favorited item ids persisted as a JSON array under one key.
//! Every read goes to storage so a read after a change notification sees
//! the latest write from any view.

use std::collections::BTreeSet;
use std::rc::Rc;

use tracing::{debug, error, warn};

use crate::error::StoreResult;
use crate::storage::{ChangeNotifier, KeyValueStore};

pub struct Favorites<S: KeyValueStore> {
    store: Rc<S>,
    notifier: Rc<ChangeNotifier>,
    key: String,
}

impl<S: KeyValueStore> Clone for Favorites<S> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            notifier: Rc::clone(&self.notifier),
            key: self.key.clone(),
        }
    }
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn new(store: Rc<S>, notifier: Rc<ChangeNotifier>, key: impl Into<String>) -> Self {
        Self { store, notifier, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current favorites; empty when storage is missing or corrupt
    pub fn get_favorites(&self) -> BTreeSet<u32> {
        match self.load() {
            Ok(ids) => ids,
            Err(e) => {
                warn!("[FAV] Ignoring stored favorites under '{}': {}", self.key, e);
                BTreeSet::new()
            }
        }
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.get_favorites().contains(&id)
    }

    pub fn count(&self) -> usize {
        self.get_favorites().len()
    }

    /// Flip membership and return the stored state; a failed write leaves
    /// membership unchanged
    pub fn toggle(&self, id: u32) -> bool {
        let mut ids = self.get_favorites();
        let now_favorite = if ids.remove(&id) {
            false
        } else {
            ids.insert(id);
            true
        };
        if !self.set_favorites(&ids) {
            return !now_favorite;
        }
        debug!("[FAV] Toggled {} -> {}", id, now_favorite);
        now_favorite
    }

    /// Returns whether the write reached storage
    pub fn set_favorites(&self, ids: &BTreeSet<u32>) -> bool {
        match self.save(ids) {
            Ok(()) => {
                self.notifier.notify(&self.key);
                true
            }
            Err(e) => {
                error!("[FAV] Failed to persist favorites: {}", e);
                false
            }
        }
    }

    fn load(&self) -> StoreResult<BTreeSet<u32>> {
        match self.store.get(&self.key)? {
            None => Ok(BTreeSet::new()),
            Some(raw) => {
                let ids: Vec<u32> = serde_json::from_str(&raw)?;
                Ok(ids.into_iter().collect())
            }
        }
    }

    fn save(&self, ids: &BTreeSet<u32>) -> StoreResult<()> {
        let ids: Vec<u32> = ids.iter().copied().collect();
        let raw = serde_json::to_string(&ids)?;
        self.store.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::storage::MemoryStore;

    fn make_favorites() -> (Rc<MemoryStore>, Rc<ChangeNotifier>, Favorites<MemoryStore>) {
        let store = Rc::new(MemoryStore::new());
        let notifier = Rc::new(ChangeNotifier::new());
        let favorites = Favorites::new(Rc::clone(&store), Rc::clone(&notifier), "favorites");
        (store, notifier, favorites)
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let (_, _, favorites) = make_favorites();
        assert!(favorites.toggle(7));
        assert!(favorites.is_favorite(7));
        assert!(!favorites.toggle(7));
        assert!(!favorites.is_favorite(7));
    }

    #[test]
    fn test_set_then_get_is_equal() {
        let (_, _, favorites) = make_favorites();
        let ids: BTreeSet<u32> = [3, 1, 12].into_iter().collect();
        assert!(favorites.set_favorites(&ids));
        assert_eq!(favorites.get_favorites(), ids);
    }

    #[test]
    fn test_corrupt_storage_reads_as_empty() {
        let (store, _, favorites) = make_favorites();
        store.set("favorites", "{not json").unwrap();
        assert!(favorites.get_favorites().is_empty());
        // recovers on the next write
        assert!(favorites.toggle(4));
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[4]"));
    }

    #[test]
    fn test_unavailable_storage_degrades() {
        let (store, notifier, favorites) = make_favorites();
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        notifier.subscribe(Rc::new(move |_key: &str| c.set(c.get() + 1)));

        store.set_offline(true);
        assert!(favorites.get_favorites().is_empty());
        assert!(!favorites.toggle(1));
        assert!(!favorites.toggle(1));
        assert!(!favorites.is_favorite(1));
        assert!(!favorites.set_favorites(&[1].into_iter().collect()));
        assert_eq!(calls.get(), 0);

        store.set_offline(false);
        assert!(favorites.toggle(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_write_notifies_other_views() {
        let (store, notifier, favorites) = make_favorites();
        let other_view = Favorites::new(Rc::clone(&store), Rc::clone(&notifier), "favorites");
        let seen = Rc::new(Cell::new(false));
        let s = Rc::clone(&seen);
        let reader = other_view.clone();
        notifier.subscribe(Rc::new(move |key: &str| {
            if key == "favorites" {
                s.set(reader.is_favorite(9));
            }
        }));

        favorites.toggle(9);
        assert!(seen.get());
    }
}
