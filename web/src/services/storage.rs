//! `localStorage`-backed flag persistence

use feeding_controller::core::error::{AppError, Result};
use feeding_controller::core::service::FlagStore;
use feeding_controller::services::flags::MemoryFlagStore;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Flags stored under their plain key names in `window.localStorage`
pub struct LocalStorageFlagStore {
    storage: Storage,
}

impl LocalStorageFlagStore {
    /// `None` when the browser denies storage access (private mode, sandboxed iframe)
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

fn storage_error(err: JsValue) -> AppError {
    AppError::Storage(format!("{:?}", err))
}

impl FlagStore for LocalStorageFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(storage_error)
    }
}

/// `localStorage` when available, otherwise an in-memory store that forgets the
/// flags on reload
pub fn open_flag_store() -> Box<dyn FlagStore> {
    match LocalStorageFlagStore::new() {
        Some(store) => Box::new(store),
        None => {
            log::warn!("localStorage unavailable, flags will not survive a reload");
            Box::new(MemoryFlagStore::new())
        }
    }
}
