use crate::storage::{validate_key, Storage};
use crate::{fs, Result};
use std::path::{Path, PathBuf};
use tracing::trace;

/// An implementation of the `Storage` trait that keeps the value for each key in the file
/// `<dir>/<key>.json`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a `FileStorage` rooted at `dir`, creating the directory if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The path of the file that holds the value for `key`.
    pub fn path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key)?;
        trace!("Reading {}", path.display());
        fs::read_optional(path)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key)?;
        trace!("Writing {} bytes to {}", value.len(), path.display());
        fs::write_atomic(path, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_directory() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("storage")).unwrap();
        assert!(storage.dir().is_dir());
    }

    #[test]
    fn test_get_missing_key() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert_eq!(storage.get("expense-tracker-data").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();
        storage.set("expense-tracker-data", "[]").unwrap();
        assert_eq!(
            storage.get("expense-tracker-data").unwrap().as_deref(),
            Some("[]")
        );
        assert!(dir.path().join("expense-tracker-data.json").is_file());

        // a second instance over the same directory sees the value
        let other = FileStorage::new(dir.path()).unwrap();
        assert_eq!(
            other.get("expense-tracker-data").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_rejects_bad_keys() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();
        assert!(storage.get("../outside").is_err());
        assert!(storage.set("a/b", "[]").is_err());
    }
}
