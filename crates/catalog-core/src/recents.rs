//! Recent Searches
//!
//! Most-recent-first list of submitted queries, deduplicated and capped,
//! persisted as a JSON array of strings.

use std::rc::Rc;

use tracing::{error, warn};

use crate::error::{StoreError, StoreResult};
use crate::storage::{ChangeNotifier, KeyValueStore};

pub const DEFAULT_CAP: usize = 8;

pub struct RecentSearches<S: KeyValueStore> {
    store: Rc<S>,
    notifier: Rc<ChangeNotifier>,
    key: String,
    cap: usize,
}

impl<S: KeyValueStore> Clone for RecentSearches<S> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            notifier: Rc::clone(&self.notifier),
            key: self.key.clone(),
            cap: self.cap,
        }
    }
}

impl<S: KeyValueStore> RecentSearches<S> {
    pub fn new(
        store: Rc<S>,
        notifier: Rc<ChangeNotifier>,
        key: impl Into<String>,
        cap: usize,
    ) -> Self {
        Self { store, notifier, key: key.into(), cap: cap.max(1) }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> Vec<String> {
        match self.load() {
            Ok(queries) => queries,
            Err(e) => {
                warn!("[RECENT] Ignoring stored searches under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Record a submitted query. Blank input is ignored; an existing entry
    /// moves to the front instead of being duplicated.
    pub fn add(&self, query: &str) -> Vec<String> {
        let query = query.trim();
        let mut queries = self.get();
        if query.is_empty() {
            return queries;
        }
        queries.retain(|q| q != query);
        queries.insert(0, query.to_string());
        queries.truncate(self.cap);
        self.save(&queries);
        queries
    }

    pub fn remove(&self, query: &str) -> Vec<String> {
        let mut queries = self.get();
        let before = queries.len();
        queries.retain(|q| q != query);
        if queries.len() != before {
            self.save(&queries);
        }
        queries
    }

    pub fn clear(&self) {
        match self.store.remove(&self.key) {
            Ok(()) => self.notifier.notify(&self.key),
            Err(e) => error!("[RECENT] Failed to clear searches: {}", e),
        }
    }

    fn load(&self) -> StoreResult<Vec<String>> {
        match self.store.get(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => Ok(serde_json::from_str(&raw)?),
        }
    }

    fn save(&self, queries: &[String]) {
        let result = serde_json::to_string(queries)
            .map_err(StoreError::from)
            .and_then(|raw| self.store.set(&self.key, &raw));
        match result {
            Ok(()) => self.notifier.notify(&self.key),
            Err(e) => error!("[RECENT] Failed to persist searches: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn make_recents(cap: usize) -> (Rc<MemoryStore>, RecentSearches<MemoryStore>) {
        let store = Rc::new(MemoryStore::new());
        let notifier = Rc::new(ChangeNotifier::new());
        let recents = RecentSearches::new(Rc::clone(&store), notifier, "recentSearches", cap);
        (store, recents)
    }

    #[test]
    fn test_duplicate_moves_to_front() {
        let (_, recents) = make_recents(DEFAULT_CAP);
        recents.add("pixel");
        recents.add("galaxy");
        recents.add("pixel");
        assert_eq!(recents.get(), vec!["pixel", "galaxy"]);
    }

    #[test]
    fn test_ninth_query_drops_oldest() {
        let (_, recents) = make_recents(DEFAULT_CAP);
        for i in 1..=9 {
            recents.add(&format!("query {}", i));
        }
        let queries = recents.get();
        assert_eq!(queries.len(), 8);
        assert_eq!(queries[0], "query 9");
        assert!(!queries.contains(&"query 1".to_string()));
    }

    #[test]
    fn test_blank_queries_ignored_and_trimmed() {
        let (_, recents) = make_recents(DEFAULT_CAP);
        recents.add("   ");
        recents.add("  redmi note ");
        assert_eq!(recents.get(), vec!["redmi note"]);
    }

    #[test]
    fn test_remove_and_clear() {
        let (store, recents) = make_recents(DEFAULT_CAP);
        recents.add("a");
        recents.add("b");
        assert_eq!(recents.remove("a"), vec!["b"]);
        recents.clear();
        assert!(recents.get().is_empty());
        assert_eq!(store.get("recentSearches").unwrap(), None);
    }

    #[test]
    fn test_corrupt_storage_reads_as_empty() {
        let (store, recents) = make_recents(DEFAULT_CAP);
        store.set("recentSearches", "[1, 2").unwrap();
        assert!(recents.get().is_empty());
        assert_eq!(recents.add("oneplus"), vec!["oneplus"]);
    }

    #[test]
    fn test_persisted_order_round_trips() {
        let (store, recents) = make_recents(DEFAULT_CAP);
        recents.add("first");
        recents.add("second");
        assert_eq!(store.get("recentSearches").unwrap().as_deref(), Some(r#"["second","first"]"#));
    }
}
