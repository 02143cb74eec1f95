//! Browser Storage Adapter
//!
//! `localStorage` behind the core persistence port, plus the bridge from
//! the window `storage` event (writes made by other tabs) into the shared
//! change notifier.

use std::rc::Rc;

use catalog_core::{ChangeNotifier, KeyValueStore, StoreError, StoreResult};
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage(&self) -> StoreResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.local_storage()?
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.local_storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }
}

/// Forward `storage` events for `keys` to the notifier. The browser only
/// fires them in tabs other than the writer.
pub fn bind_storage_events(notifier: Rc<ChangeNotifier>, keys: Vec<String>) {
    let on_storage = Closure::<dyn FnMut(_)>::new(move |ev: web_sys::StorageEvent| {
        // key is None when another tab called localStorage.clear()
        match ev.key() {
            Some(key) if keys.contains(&key) => {
                debug!("[STORAGE] External change to '{}'", key);
                notifier.notify(&key);
            }
            Some(_) => {}
            None => {
                for key in &keys {
                    notifier.notify(key);
                }
            }
        }
    });

    match web_sys::window() {
        Some(win) => {
            let _ = win
                .add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref());
        }
        None => warn!("[STORAGE] No window; cross-tab sync disabled"),
    }
    on_storage.forget();
}
