use std::sync::Arc;

use folio_prefs::{MemoryPrefs, PrefStore};
use folio_theme::{SystemScheme, ThemeMode, ThemeStore, THEME_PREF_KEY};

fn store_with(prefs: Arc<MemoryPrefs>) -> ThemeStore {
    ThemeStore::new(prefs)
}

#[test]
fn defaults_to_dark_before_initialization() {
    let store = store_with(Arc::new(MemoryPrefs::new()));
    assert_eq!(store.mode(), ThemeMode::Dark);
    assert!(!store.is_initialized());
}

#[test]
fn initialize_without_persisted_value_follows_light_os_preference() {
    let store = store_with(Arc::new(MemoryPrefs::new()));
    store.initialize(SystemScheme::Light);
    assert_eq!(store.mode(), ThemeMode::Light);
    assert!(store.is_initialized());
}

#[test]
fn initialize_without_persisted_value_or_light_preference_stays_dark() {
    for system in [SystemScheme::Dark, SystemScheme::NoPreference] {
        let store = store_with(Arc::new(MemoryPrefs::new()));
        store.initialize(system);
        assert_eq!(store.mode(), ThemeMode::Dark, "system={system:?}");
        assert!(store.is_initialized());
    }
}

#[test]
fn persisted_mode_wins_over_os_preference() {
    let prefs = Arc::new(MemoryPrefs::with_entries([(THEME_PREF_KEY, "light")]));
    let store = store_with(prefs);
    store.initialize(SystemScheme::Dark);
    assert_eq!(store.mode(), ThemeMode::Light);
}

#[test]
fn corrupted_persisted_mode_is_treated_as_absent() {
    let prefs = Arc::new(MemoryPrefs::with_entries([(THEME_PREF_KEY, "blurple")]));
    let store = store_with(prefs.clone());
    store.initialize(SystemScheme::NoPreference);
    assert_eq!(store.mode(), ThemeMode::Dark);

    // Reconciliation never writes back, even to repair a corrupted value.
    assert_eq!(prefs.get(THEME_PREF_KEY), Some("blurple".to_string()));
}

#[test]
fn toggle_twice_returns_to_original_mode() {
    let store = store_with(Arc::new(MemoryPrefs::new()));
    store.initialize(SystemScheme::NoPreference);

    let original = store.mode();
    store.toggle();
    assert_ne!(store.mode(), original);
    store.toggle();
    assert_eq!(store.mode(), original);
}

#[test]
fn toggle_persists_but_initialize_does_not() {
    let prefs = Arc::new(MemoryPrefs::new());
    let store = store_with(prefs.clone());

    store.initialize(SystemScheme::Light);
    assert_eq!(prefs.get(THEME_PREF_KEY), None);

    store.toggle();
    assert_eq!(prefs.get(THEME_PREF_KEY), Some("dark".to_string()));
}

#[test]
fn toggled_mode_survives_reload() {
    // Fresh session, no storage, OS prefers dark.
    let prefs = Arc::new(MemoryPrefs::new());
    let store = store_with(prefs.clone());
    store.initialize(SystemScheme::Dark);
    assert_eq!(store.mode(), ThemeMode::Dark);
    assert!(store.is_initialized());

    // One toggle lands on light and persists it.
    assert_eq!(store.toggle(), ThemeMode::Light);
    assert_eq!(prefs.get(THEME_PREF_KEY), Some("light".to_string()));

    // Simulated reload: a fresh store over the same prefs.
    let reloaded = store_with(prefs);
    reloaded.initialize(SystemScheme::Dark);
    assert_eq!(reloaded.mode(), ThemeMode::Light);
}

#[test]
fn change_callback_fires_on_every_toggle() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static CALLS: AtomicUsize = AtomicUsize::new(0);

    let store = store_with(Arc::new(MemoryPrefs::new()));
    store.initialize(SystemScheme::NoPreference);
    store.set_change_callback(|| {
        CALLS.fetch_add(1, Ordering::SeqCst);
    });

    store.toggle();
    store.toggle();
    assert_eq!(CALLS.load(Ordering::SeqCst), 2);
}

#[test]
fn toggle_succeeds_in_memory_when_storage_is_unavailable() {
    let prefs = Arc::new(MemoryPrefs::new());
    let store = store_with(prefs.clone());
    store.initialize(SystemScheme::NoPreference);

    prefs.set_read_only(true);
    assert_eq!(store.toggle(), ThemeMode::Light);
    assert_eq!(store.mode(), ThemeMode::Light);
    assert_eq!(prefs.get(THEME_PREF_KEY), None);
}
