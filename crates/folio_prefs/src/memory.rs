use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::{PrefStore, PrefsError};

/// In-memory preference store.
///
/// Used by tests and by sessions where no durable storage is available. The
/// read-only switch simulates the "storage disabled" environment: reads keep
/// working, writes fail, and callers are expected to carry on.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    entries: Mutex<HashMap<String, String>>,
    read_only: AtomicBool,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, as if earlier sessions had persisted `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Mutex::new(map),
            read_only: AtomicBool::new(false),
        }
    }

    /// Make subsequent writes fail with [`PrefsError::ReadOnly`].
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(PrefsError::ReadOnly);
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_key_is_none() {
        let prefs = MemoryPrefs::new();
        assert_eq!(prefs.get("portfolio-language"), None);
    }

    #[test]
    fn seeded_entries_are_visible() {
        let prefs = MemoryPrefs::with_entries([("portfolio-language", "th")]);
        assert_eq!(prefs.get("portfolio-language"), Some("th".to_string()));
    }

    #[test]
    fn read_only_rejects_writes_but_keeps_reads() {
        let prefs = MemoryPrefs::with_entries([("portfolio-theme", "dark")]);
        prefs.set_read_only(true);

        assert!(matches!(
            prefs.set("portfolio-theme", "light"),
            Err(PrefsError::ReadOnly)
        ));
        assert_eq!(prefs.get("portfolio-theme"), Some("dark".to_string()));
    }
}
