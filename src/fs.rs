//! Blocking filesystem helpers used by the storage backends.

use crate::Result;
use anyhow::Context;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub(crate) fn create_dir_all(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path)
        .with_context(|| format!("Unable to create directory {}", path.display()))
}

/// Reads a file to a `String`, returning `None` if the file does not exist.
pub(crate) fn read_optional(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) => match e.kind() {
            ErrorKind::NotFound => Ok(None),
            _ => Err(e).with_context(|| format!("Unable to read file {}", path.display())),
        },
    }
}

/// Writes `data` next to `path` and then renames it into place so that readers never observe a
/// partially written file.
pub(crate) fn write_atomic(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    let tmp = tmp_path(path);
    std::fs::write(&tmp, data)
        .with_context(|| format!("Unable to write data to {}", tmp.display()))?;
    std::fs::rename(&tmp, path).with_context(|| {
        format!(
            "Unable to move '{}' to '{}'",
            tmp.display(),
            path.display()
        )
    })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_optional_missing_file() {
        let dir = TempDir::new().unwrap();
        let found = read_optional(dir.path().join("nope.json")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_read_optional_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_optional(dir.path()).is_err());
    }

    #[test]
    fn test_write_atomic_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        write_atomic(&path, "[1]").unwrap();
        write_atomic(&path, "[2]").unwrap();
        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("[2]"));
        assert!(!dir.path().join("data.json.tmp").exists());
    }

    #[test]
    fn test_create_dir_all_nested() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        create_dir_all(&nested).unwrap();
        create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
