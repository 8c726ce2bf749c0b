//! The key-value storage facility that expense data is persisted to.
//!
//! A store only ever reads and overwrites a single value under a single key. `FileStorage` keeps
//! each key in its own JSON file and `MemoryStorage` keeps everything in a `HashMap`.

mod file;
mod memory;

use crate::Result;
use anyhow::{bail, ensure};

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// The key under which the expense list is stored unless configured otherwise.
pub const DEFAULT_KEY: &str = "expense-tracker-data";

/// A synchronous string key-value store.
pub trait Storage {
    /// Returns the value stored under `key`, or `None` if nothing has been stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Checks that `key` can be used as a storage key. Keys become file names, so they are limited to
/// ASCII letters, digits, `-`, `_` and `.`, and may not start with a `.`.
pub fn validate_key(key: &str) -> Result<()> {
    ensure!(!key.is_empty(), "The storage key cannot be empty");
    if key.starts_with('.') {
        bail!("The storage key '{key}' cannot start with '.'");
    }
    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        bail!("The storage key '{key}' contains the invalid character '{bad}'");
    }
    Ok(())
}
