use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{PrefStore, PrefsError};

/// On-disk shape: a single flat TOML table.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct PrefsFile {
    entries: BTreeMap<String, String>,
}

/// File-backed preference store: one flat TOML table per user.
///
/// Reads re-load the file on every call so that a fresh store constructed
/// against the same path observes earlier writes (reload semantics). Writes
/// rewrite the whole table; the table is tiny (a handful of keys), so no
/// incremental update is attempted.
#[derive(Debug, Clone)]
pub struct FilePrefs {
    path: PathBuf,
}

impl FilePrefs {
    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location
    /// (e.g. `~/.config/folio/prefs.toml` on Linux).
    pub fn default_location() -> Result<Self, PrefsError> {
        let dirs = ProjectDirs::from("", "", "folio").ok_or(PrefsError::NoConfigDir)?;
        Ok(Self::at(dirs.config_dir().join("prefs.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> PrefsFile {
        let src = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) => {
                // Missing file is the normal first-run state.
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("could not read {}: {e}", self.path.display());
                }
                return PrefsFile::default();
            }
        };
        match toml::from_str(&src) {
            Ok(file) => file,
            Err(e) => {
                // Corrupted file reads as empty; it will be rewritten whole
                // on the next set().
                warn!("ignoring unparseable {}: {e}", self.path.display());
                PrefsFile::default()
            }
        }
    }
}

impl PrefStore for FilePrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.load().entries.remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut file = self.load();
        file.entries.insert(key.to_string(), value.to_string());
        let body = toml::to_string(&file)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PrefsError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, body).map_err(|source| PrefsError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!("persisted {key}={value} to {}", self.path.display());
        Ok(())
    }
}
