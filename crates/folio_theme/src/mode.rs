use std::fmt;
use std::str::FromStr;

/// Display mode. `Dark` is the application default and the deterministic
/// fallback for anything rendered before reconciliation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// The opposite mode. Involutive: `m.toggled().toggled() == m`.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Wire/storage form, matching the persisted `"light"`/`"dark"` values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse of the storage form. Anything but `"light"`/`"dark"` is
/// invalid; callers treat an invalid persisted value as absent.
impl FromStr for ThemeMode {
    type Err = InvalidThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(InvalidThemeMode(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid theme mode `{0}` (expected `light` or `dark`)")]
pub struct InvalidThemeMode(String);
