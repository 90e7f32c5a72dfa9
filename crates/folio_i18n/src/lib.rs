//! folio localization (i18n)
//!
//! Single source of truth for the active display language and the resolved
//! translation dictionaries:
//! - [`Language`]: the two supported languages (`en`, `th`), strict-parsed at
//!   every untrusted boundary.
//! - [`Dictionary`]: a complete per-language catalog of semantic key paths to
//!   strings or string lists, embedded at compile time from YAML.
//! - [`LocaleStore`]: persisted language switching with a structural-parity
//!   guarantee across both dictionaries and a general English fallback for
//!   missing keys.
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_i18n::{Language, LocaleStore};
//! use folio_prefs::MemoryPrefs;
//!
//! let store = LocaleStore::new(Arc::new(MemoryPrefs::new())).unwrap();
//! store.initialize();
//! assert_eq!(store.language(), Language::En);
//! assert_eq!(store.text("nav.home"), "Home");
//!
//! store.set_language(Language::Th);
//! assert_eq!(store.text("nav.home"), "หน้าหลัก");
//! ```

mod dictionary;
mod error;
mod language;
mod store;

pub use dictionary::{CatalogError, Dictionary, Entry};
pub use error::I18nError;
pub use language::{Language, UnsupportedLanguage};
pub use store::{LocaleStore, LANGUAGE_PREF_KEY};
