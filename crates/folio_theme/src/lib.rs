//! folio theme state
//!
//! Single source of truth for the display mode (light/dark) with
//! environment-aware initialization:
//!
//! 1. The store is created in its deterministic default (`Dark`,
//!    uninitialized) so consumers can render immediately.
//! 2. [`ThemeStore::initialize`] reconciles once against the persisted
//!    preference, then the OS color scheme, then the dark default.
//! 3. Only explicit [`ThemeStore::toggle`] calls persist; an OS-derived mode
//!    is not sticky across reloads unless the user toggles.
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_prefs::MemoryPrefs;
//! use folio_theme::{SystemScheme, ThemeMode, ThemeStore};
//!
//! let store = ThemeStore::new(Arc::new(MemoryPrefs::new()));
//! store.initialize(SystemScheme::NoPreference);
//! assert_eq!(store.mode(), ThemeMode::Dark);
//! ```

mod mode;
mod platform;
mod store;

pub use mode::{InvalidThemeMode, ThemeMode};
pub use platform::{detect_system_scheme, SystemScheme};
pub use store::{ThemeStore, THEME_PREF_KEY};
