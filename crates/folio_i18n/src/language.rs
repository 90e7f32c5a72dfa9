use std::fmt;
use std::str::FromStr;

/// Supported display languages. `En` is the default and the fallback base
/// for missing-key resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Th,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Th];

    /// Wire/storage form, matching the persisted `"en"`/`"th"` values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Th => "th",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse of the storage form. Unsupported codes are rejected at this
/// boundary; they never reach store state.
impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "th" => Ok(Self::Th),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported language code `{0}` (expected `en` or `th`)")]
pub struct UnsupportedLanguage(String);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn storage_form_roundtrips() {
        for lang in Language::ALL {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn unsupported_codes_are_rejected() {
        for code in ["fr", "EN", "th-TH", ""] {
            assert!(code.parse::<Language>().is_err(), "code={code:?}");
        }
    }
}
