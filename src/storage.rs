//! Browser Storage
//!
//! `FlagStore` over `window.localStorage`. Storage being unavailable (private
//! mode, no window) reads as "absent" and drops writes.

use pokedex_domain::FlagStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageFlags;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl FlagStore for LocalStorageFlags {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
