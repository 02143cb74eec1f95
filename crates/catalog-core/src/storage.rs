//! Persistence Port
//!
//! Abstract key-value interface behind favorites and recent searches.
//! The browser adapter lives in the frontend; `MemoryStore` backs tests
//! and hosts without local storage.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{StoreError, StoreResult};

/// Whole-value string storage under fixed keys
pub trait KeyValueStore {
    /// Read a key. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value under a key
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

/// In-memory store. Can be switched offline to exercise failure paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    offline: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent call fails with `StoreError::Unavailable`
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    fn check(&self) -> StoreResult<()> {
        if self.offline.get() {
            Err(StoreError::Unavailable("memory store is offline".into()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check()?;
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

pub type ChangeCallback = Rc<dyn Fn(&str)>;

/// Handle returned by [`ChangeNotifier::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Observer list for storage-key changes, shared by every view that shows
/// favorite or recent-search state.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, ChangeCallback)>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: ChangeCallback) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, callback));
        Subscription(id)
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription.0);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Call every listener with the changed key. Listeners may subscribe or
    /// unsubscribe from inside the callback.
    pub fn notify(&self, key: &str) {
        let snapshot: Vec<ChangeCallback> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in snapshot {
            callback(key);
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
