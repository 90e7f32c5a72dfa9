use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, warn};

use folio_prefs::PrefStore;

use crate::{SystemScheme, ThemeMode};

/// Storage key for the persisted display mode.
pub const THEME_PREF_KEY: &str = "portfolio-theme";

/// Owner of the current display mode.
///
/// Created in the dark default with `initialized = false`; consumers that
/// render before [`ThemeStore::initialize`] has run therefore already see the
/// deterministic dark fallback. Mutation goes exclusively through
/// [`ThemeStore::toggle`]; collaborators hold the store behind an `Arc` and
/// read snapshots.
pub struct ThemeStore {
    mode: RwLock<ThemeMode>,
    initialized: AtomicBool,
    prefs: Arc<dyn PrefStore>,
    on_change: Mutex<Option<fn()>>,
}

impl ThemeStore {
    pub fn new(prefs: Arc<dyn PrefStore>) -> Self {
        Self {
            mode: RwLock::new(ThemeMode::default()),
            initialized: AtomicBool::new(false),
            prefs,
            on_change: Mutex::new(None),
        }
    }

    /// One-shot reconciliation against persisted and environment state.
    ///
    /// Resolution order: valid persisted mode, then an explicit light OS
    /// preference, then the dark default. Nothing is persisted on this path,
    /// so an OS-derived mode is not sticky across reloads. Idempotent: a
    /// re-run re-derives the same result from the same inputs.
    pub fn initialize(&self, system: SystemScheme) {
        let resolved = match self.persisted_mode() {
            Some(saved) => saved,
            None if system == SystemScheme::Light => ThemeMode::Light,
            None => ThemeMode::Dark,
        };

        let mut mode = self.mode.write().unwrap();
        if *mode != resolved {
            debug!("theme reconciled: {} -> {resolved}", *mode);
        }
        *mode = resolved;
        drop(mode);

        self.initialized.store(true, Ordering::SeqCst);
    }

    /// Flip between light and dark and persist the result.
    ///
    /// The in-memory flip always succeeds; a persistence failure is logged
    /// and swallowed, meaning the mode reverts to the environment-derived
    /// default on the next load.
    pub fn toggle(&self) -> ThemeMode {
        let mut mode = self.mode.write().unwrap();
        let next = mode.toggled();
        debug!("theme toggled: {} -> {next}", *mode);
        *mode = next;
        drop(mode);

        if let Err(e) = self.prefs.set(THEME_PREF_KEY, next.as_str()) {
            warn!("theme preference not persisted: {e}");
        }

        self.notify();
        next
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.read().unwrap()
    }

    /// Whether reconciliation has run. Before that, [`ThemeStore::mode`]
    /// reports the provisional dark default.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Register the collaborator redraw hook, fired after every committed
    /// mode change.
    pub fn set_change_callback(&self, callback: fn()) {
        *self.on_change.lock().unwrap() = Some(callback);
    }

    fn notify(&self) {
        if let Some(cb) = *self.on_change.lock().unwrap() {
            cb();
        }
    }

    fn persisted_mode(&self) -> Option<ThemeMode> {
        let raw = self.prefs.get(THEME_PREF_KEY)?;
        match raw.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                // Corrupted value is the same as no value.
                warn!("{e}; falling back to defaults");
                None
            }
        }
    }
}
