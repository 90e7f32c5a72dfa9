use std::collections::BTreeMap;

use thiserror::Error;

use crate::Language;

const MAX_ENTRIES: usize = 2_000;
const MAX_KEY_BYTES: usize = 128;
const MAX_TEXT_BYTES: usize = 8 * 1024;
const MAX_LIST_ITEMS: usize = 64;

/// Built-in catalog sources, fixed at compile time.
const EN_CATALOG: &str = include_str!("../catalogs/en.yaml");
const TH_CATALOG: &str = include_str!("../catalogs/th.yaml");

fn is_valid_key(key: &str) -> bool {
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
}

/// One localized value: a display string or an ordered list of display
/// strings (feature bullets, achievements).
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    Text(String),
    List(Vec<String>),
}

impl Entry {
    fn shape(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::List(_) => "list",
        }
    }
}

/// The complete set of localized strings for one language, keyed by semantic
/// path (`hero.greeting`, `experience.pos.achievements`).
///
/// Catalogs are YAML mappings of dotted keys to strings or string lists:
///
/// ```yaml
/// hero.greeting: "Hi, I'm"
/// featured.features:
///   - "first bullet"
///   - "second bullet"
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Dictionary {
    language: Language,
    entries: BTreeMap<String, Entry>,
}

impl Dictionary {
    /// Parse a YAML catalog for `language`.
    pub fn parse(language: Language, src: &str) -> Result<Self, CatalogError> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(src).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let serde_yaml::Value::Mapping(raw) = value else {
            return Err(CatalogError::NotAMapping);
        };
        if raw.len() > MAX_ENTRIES {
            return Err(CatalogError::TooManyEntries(MAX_ENTRIES));
        }

        let mut entries = BTreeMap::new();
        for (k, v) in raw {
            let Some(key) = k.as_str() else {
                return Err(CatalogError::Parse("keys must be strings".to_string()));
            };
            if !is_valid_key(key) || key.len() > MAX_KEY_BYTES {
                return Err(CatalogError::InvalidKey(key.to_string()));
            }
            let entry = parse_entry(key, v)?;
            entries.insert(key.to_string(), entry);
        }

        Ok(Self { language, entries })
    }

    /// The built-in catalog for `language`, embedded at compile time.
    pub fn builtin(language: Language) -> Result<Self, CatalogError> {
        match language {
            Language::En => Self::parse(language, EN_CATALOG),
            Language::Th => Self::parse(language, TH_CATALOG),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All key paths, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// The string value for `key`, or `None` if absent or a list.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key)? {
            Entry::Text(s) => Some(s),
            Entry::List(_) => None,
        }
    }

    /// The list value for `key`, or `None` if absent or a plain string.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.entries.get(key)? {
            Entry::List(items) => Some(items),
            Entry::Text(_) => None,
        }
    }

    /// Structural comparison against another language's dictionary.
    ///
    /// Parity requires the same key set and the same shape (text vs list) per
    /// key; list lengths and the strings themselves are free to differ. An
    /// empty result means the two catalogs are structurally identical.
    pub fn parity_issues(&self, other: &Dictionary) -> Vec<String> {
        let mut issues = Vec::new();
        for (key, entry) in &self.entries {
            match other.entries.get(key) {
                None => issues.push(format!("`{key}` missing from {}", other.language)),
                Some(o) if o.shape() != entry.shape() => issues.push(format!(
                    "`{key}` is {} in {} but {} in {}",
                    entry.shape(),
                    self.language,
                    o.shape(),
                    other.language
                )),
                Some(_) => {}
            }
        }
        for key in other.entries.keys() {
            if !self.entries.contains_key(key) {
                issues.push(format!("`{key}` missing from {}", self.language));
            }
        }
        issues
    }
}

fn parse_entry(key: &str, value: serde_yaml::Value) -> Result<Entry, CatalogError> {
    match value {
        serde_yaml::Value::String(s) => {
            if s.len() > MAX_TEXT_BYTES {
                return Err(CatalogError::Value {
                    key: key.to_string(),
                    reason: format!("value too long (max {MAX_TEXT_BYTES} bytes)"),
                });
            }
            Ok(Entry::Text(s))
        }
        serde_yaml::Value::Sequence(seq) => {
            if seq.len() > MAX_LIST_ITEMS {
                return Err(CatalogError::Value {
                    key: key.to_string(),
                    reason: format!("too many list items (max {MAX_LIST_ITEMS})"),
                });
            }
            let mut items = Vec::with_capacity(seq.len());
            for item in seq {
                let serde_yaml::Value::String(s) = item else {
                    return Err(CatalogError::Value {
                        key: key.to_string(),
                        reason: "list items must be strings".to_string(),
                    });
                };
                if s.len() > MAX_TEXT_BYTES {
                    return Err(CatalogError::Value {
                        key: key.to_string(),
                        reason: format!("list item too long (max {MAX_TEXT_BYTES} bytes)"),
                    });
                }
                items.push(s);
            }
            Ok(Entry::List(items))
        }
        _ => Err(CatalogError::Value {
            key: key.to_string(),
            reason: "values must be strings or lists of strings".to_string(),
        }),
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("yaml parse error: {0}")]
    Parse(String),

    #[error("catalog must be a yaml mapping")]
    NotAMapping,

    #[error("invalid key `{0}` (allowed: [A-Za-z0-9][A-Za-z0-9_.-]*, max 128 bytes)")]
    InvalidKey(String),

    #[error("bad value for `{key}`: {reason}")]
    Value { key: String, reason: String },

    #[error("too many entries (max {0})")]
    TooManyEntries(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_text_and_list_entries() {
        let src = r#"
hero.greeting: "Hi, I'm"
featured.features:
  - "one"
  - "two"
"#;
        let dict = Dictionary::parse(Language::En, src).unwrap();
        assert_eq!(dict.text("hero.greeting"), Some("Hi, I'm"));
        assert_eq!(
            dict.list("featured.features"),
            Some(&["one".to_string(), "two".to_string()][..])
        );
        // Shape-mismatched accessors return None rather than coercing.
        assert_eq!(dict.text("featured.features"), None);
        assert_eq!(dict.list("hero.greeting"), None);
    }

    #[test]
    fn rejects_non_string_values() {
        let err = Dictionary::parse(Language::En, "hero.title: 123\n").unwrap_err();
        assert!(matches!(err, CatalogError::Value { .. }));
    }

    #[test]
    fn rejects_invalid_keys() {
        let err = Dictionary::parse(Language::En, "\"bad key\": \"nope\"\n").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidKey(_)));

        let err = Dictionary::parse(Language::En, "\".leading\": \"nope\"\n").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidKey(_)));
    }

    #[test]
    fn rejects_non_mapping_documents() {
        let err = Dictionary::parse(Language::En, "- just\n- a\n- list\n").unwrap_err();
        assert!(matches!(err, CatalogError::NotAMapping));
    }

    #[test]
    fn parity_reports_missing_and_shape_mismatches() {
        let en = Dictionary::parse(
            Language::En,
            "a: \"x\"\nb: \"y\"\nc:\n  - \"one\"\n",
        )
        .unwrap();
        let th = Dictionary::parse(Language::Th, "a: \"x\"\nc: \"flat\"\nd: \"extra\"\n").unwrap();

        let issues = en.parity_issues(&th);
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().any(|i| i.contains("`b` missing from th")));
        assert!(issues.iter().any(|i| i.contains("`c` is list in en but text in th")));
        assert!(issues.iter().any(|i| i.contains("`d` missing from en")));
    }

    #[test]
    fn parity_ignores_list_length_differences() {
        let en = Dictionary::parse(Language::En, "c:\n  - \"one\"\n  - \"two\"\n").unwrap();
        let th = Dictionary::parse(Language::Th, "c:\n  - \"only\"\n").unwrap();
        assert!(en.parity_issues(&th).is_empty());
    }

    #[test]
    fn builtin_catalogs_parse() {
        for lang in Language::ALL {
            let dict = Dictionary::builtin(lang).unwrap();
            assert!(!dict.is_empty(), "{lang} catalog is empty");
            assert_eq!(dict.language(), lang);
        }
    }
}
