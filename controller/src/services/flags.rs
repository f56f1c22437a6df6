//! # Persisted Flags
//!
//! The only state that survives a restart: `hasSeenOnboarding` and `isLoggedIn`,
//! each either unset or the string `"true"`.
//!
//! [`PersistedFlags::load`] reads both once at startup. Writes go through the
//! `mark_*`/`clear_*` helpers, which return the storage error so callers can log it
//! and carry on.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::core::error::Result;
use crate::core::service::FlagStore;

pub const HAS_SEEN_ONBOARDING: &str = "hasSeenOnboarding";
pub const IS_LOGGED_IN: &str = "isLoggedIn";

const TRUE: &str = "true";

/// Startup snapshot of both flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistedFlags {
    pub has_seen_onboarding: bool,
    pub is_logged_in: bool,
}

impl PersistedFlags {
    /// Read both flags. Unreadable flags count as unset.
    pub fn load(store: &dyn FlagStore) -> Self {
        Self {
            has_seen_onboarding: read_flag(store, HAS_SEEN_ONBOARDING),
            is_logged_in: read_flag(store, IS_LOGGED_IN),
        }
    }
}

fn read_flag(store: &dyn FlagStore, key: &str) -> bool {
    match store.get(key) {
        Ok(value) => value.as_deref() == Some(TRUE),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read persisted flag, treating as unset");
            false
        }
    }
}

pub fn mark_onboarding_seen(store: &dyn FlagStore) -> Result<()> {
    store.set(HAS_SEEN_ONBOARDING, TRUE)
}

pub fn mark_logged_in(store: &dyn FlagStore) -> Result<()> {
    store.set(IS_LOGGED_IN, TRUE)
}

pub fn clear_login(store: &dyn FlagStore) -> Result<()> {
    store.remove(IS_LOGGED_IN)
}

/// In-process store, lost on exit
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `pairs`
    pub fn with_flags<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            values: Mutex::new(values),
        }
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.lock().remove(key);
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file::FileFlagStore;

#[cfg(feature = "native")]
mod file {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    use parking_lot::Mutex;

    use crate::core::error::Result;
    use crate::core::service::FlagStore;

    /// Flags kept as a JSON object of strings in a single file.
    ///
    /// The file is read on open and rewritten in full on every change. A missing
    /// file is an empty store.
    #[derive(Debug)]
    pub struct FileFlagStore {
        path: PathBuf,
        values: Mutex<BTreeMap<String, String>>,
    }

    impl FileFlagStore {
        pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
            let path = path.into();
            let values = match std::fs::read_to_string(&path) {
                Ok(raw) => serde_json::from_str(&raw)?,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
                Err(e) => return Err(e.into()),
            };
            tracing::debug!(path = %path.display(), count = values.len(), "Opened flag file");
            Ok(Self {
                path,
                values: Mutex::new(values),
            })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn write(&self, values: &BTreeMap<String, String>) -> Result<()> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let json = serde_json::to_string_pretty(values)?;
            std::fs::write(&self.path, json)?;
            Ok(())
        }
    }

    impl FlagStore for FileFlagStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.values.lock().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            let mut values = self.values.lock();
            values.insert(key.to_string(), value.to_string());
            self.write(&values)
        }

        fn remove(&self, key: &str) -> Result<()> {
            let mut values = self.values.lock();
            if values.remove(key).is_some() {
                self.write(&values)?;
            }
            Ok(())
        }
    }
}
