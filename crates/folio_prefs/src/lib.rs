//! folio preference storage
//!
//! Durable, per-user key/value storage for the folio stores. The contract is
//! deliberately loose:
//! - Absence of a key is a valid state, not an error.
//! - Writes are best-effort and non-transactional; callers degrade to their
//!   defaults on the next load if a write was lost.
//! - A corrupted backing file reads as empty rather than failing.
//!
//! Two backends:
//! - [`FilePrefs`]: a flat TOML table under the platform config directory.
//! - [`MemoryPrefs`]: in-memory map for tests and ephemeral sessions.

mod error;
mod file;
mod memory;

pub use error::PrefsError;
pub use file::FilePrefs;
pub use memory::MemoryPrefs;

/// Key/value preference storage shared by the folio stores.
///
/// Each store writes its own fixed key; keys never collide and writes to
/// different keys never interleave on the same entry.
pub trait PrefStore: Send + Sync {
    /// Read a preference. `None` means "never set" or "unreadable".
    fn get(&self, key: &str) -> Option<String>;

    /// Write a preference. Best-effort: callers are expected to log and
    /// continue on failure rather than surface it.
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}
