use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, warn};

use folio_prefs::PrefStore;

use crate::{Dictionary, I18nError, Language};

/// Storage key for the persisted language preference.
pub const LANGUAGE_PREF_KEY: &str = "portfolio-language";

/// Owner of the active language and both resolved dictionaries.
///
/// Construction parses the built-in catalogs and verifies structural parity,
/// so every dictionary handed out afterwards is guaranteed complete for its
/// language. The store starts in English; [`LocaleStore::initialize`]
/// reconciles against the persisted preference once the environment is
/// readable. Unlike the theme store there is no OS signal: language is
/// persisted-or-default, nothing else.
pub struct LocaleStore {
    language: RwLock<Language>,
    en: Dictionary,
    th: Dictionary,
    prefs: Arc<dyn PrefStore>,
    on_change: Mutex<Option<fn()>>,
}

impl LocaleStore {
    /// Build a store over the built-in EN/TH catalogs.
    ///
    /// The built-in catalogs are compile-time data, so a parity violation
    /// between them is a build defect and fails construction.
    pub fn new(prefs: Arc<dyn PrefStore>) -> Result<Self, I18nError> {
        let en = Dictionary::builtin(Language::En)?;
        let th = Dictionary::builtin(Language::Th)?;
        let issues = en.parity_issues(&th);
        if !issues.is_empty() {
            return Err(I18nError::Parity(issues.join("; ")));
        }
        Ok(Self::with_dictionaries(en, th, prefs))
    }

    /// Build a store over explicit dictionaries (tests, alternate catalogs).
    ///
    /// Parity issues are logged rather than fatal here; keys missing from a
    /// supplied catalog degrade through the English fallback in
    /// [`LocaleStore::text`]/[`LocaleStore::list`].
    pub fn with_dictionaries(en: Dictionary, th: Dictionary, prefs: Arc<dyn PrefStore>) -> Self {
        let issues = en.parity_issues(&th);
        if !issues.is_empty() {
            warn!("catalog parity issues: {}", issues.join("; "));
        }
        Self {
            language: RwLock::new(Language::default()),
            en,
            th,
            prefs,
            on_change: Mutex::new(None),
        }
    }

    /// One-shot reconciliation: adopt a valid persisted language, otherwise
    /// stay at the English default. Invalid persisted values are treated as
    /// absent. Never persists; idempotent on re-run.
    pub fn initialize(&self) {
        let Some(raw) = self.prefs.get(LANGUAGE_PREF_KEY) else {
            return;
        };
        match raw.parse::<Language>() {
            Ok(lang) => {
                let mut cur = self.language.write().unwrap();
                if *cur != lang {
                    debug!("language reconciled: {} -> {lang}", *cur);
                }
                *cur = lang;
            }
            Err(e) => warn!("{e}; staying at {}", Language::default()),
        }
    }

    pub fn language(&self) -> Language {
        *self.language.read().unwrap()
    }

    /// Switch the active language and persist the choice.
    ///
    /// The in-memory switch always succeeds; a persistence failure is logged
    /// and swallowed (the preference simply won't survive the session).
    pub fn set_language(&self, lang: Language) {
        let mut cur = self.language.write().unwrap();
        if *cur == lang {
            return;
        }
        debug!("language switched: {} -> {lang}", *cur);
        *cur = lang;
        drop(cur);

        if let Err(e) = self.prefs.set(LANGUAGE_PREF_KEY, lang.as_str()) {
            warn!("language preference not persisted: {e}");
        }

        self.notify();
    }

    /// Boundary for untrusted language codes. Unsupported codes are rejected
    /// without touching state or storage; returns whether the code was
    /// accepted.
    pub fn set_language_code(&self, code: &str) -> bool {
        match code.parse::<Language>() {
            Ok(lang) => {
                self.set_language(lang);
                true
            }
            Err(e) => {
                warn!("rejected language change: {e}");
                false
            }
        }
    }

    /// The complete dictionary for the current language.
    pub fn dictionary(&self) -> &Dictionary {
        self.dictionary_for(self.language())
    }

    pub fn dictionary_for(&self, lang: Language) -> &Dictionary {
        match lang {
            Language::En => &self.en,
            Language::Th => &self.th,
        }
    }

    /// Resolve a text key in the current language.
    ///
    /// Fallback policy is general, not per-key: a key missing from the active
    /// language resolves from English; missing from both (or list-shaped)
    /// resolves to the key itself. The built-in catalogs are parity-checked
    /// and never hit the English hop; catalogs supplied through
    /// [`LocaleStore::with_dictionaries`] may.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        let dict = self.dictionary();
        if let Some(s) = dict.text(key) {
            return s;
        }
        if let Some(s) = self.en.text(key) {
            debug!("key `{key}` missing from {}; using en", dict.language());
            return s;
        }
        debug!("key `{key}` unresolved; echoing key");
        key
    }

    /// Resolve a list key in the current language, with the same fallback
    /// policy as [`LocaleStore::text`]. Unresolvable keys yield an empty
    /// slice.
    pub fn list(&self, key: &str) -> &[String] {
        let dict = self.dictionary();
        if let Some(items) = dict.list(key) {
            return items;
        }
        if let Some(items) = self.en.list(key) {
            debug!("key `{key}` missing from {}; using en", dict.language());
            return items;
        }
        debug!("key `{key}` unresolved; empty list");
        &[]
    }

    /// Register the collaborator redraw hook, fired after every committed
    /// language change.
    pub fn set_change_callback(&self, callback: fn()) {
        *self.on_change.lock().unwrap() = Some(callback);
    }

    fn notify(&self) {
        if let Some(cb) = *self.on_change.lock().unwrap() {
            cb();
        }
    }
}
