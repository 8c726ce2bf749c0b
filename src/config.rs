//! Configuration file handling.
//!
//! The configuration file is stored at `$EXPENSE_HOME/config.json` and names the storage key that
//! the expense list is kept under. The stored data itself lives in `$EXPENSE_HOME/storage`.

use crate::storage::{validate_key, FileStorage, DEFAULT_KEY};
use crate::store::Store;
use crate::{utils, Result};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "expenses";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";
const STORAGE: &str = "storage";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to `$EXPENSE_HOME` and from there it loads `$EXPENSE_HOME/config.json`.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    storage_dir: PathBuf,
    config_file: ConfigFile,
}

impl Config {
    /// Creates the home directory, its storage directory and an initial `config.json`.
    ///
    /// # Arguments
    /// - `dir` - The directory that will be the root of the data directory, e.g. `$HOME/expenses`
    /// - `storage_key` - The key to store the expense list under. `None` uses the default key.
    ///
    /// # Errors
    /// - Returns an error if `storage_key` is not a valid key, if `config.json` already exists, or
    ///   if any file operation fails.
    pub async fn create(dir: impl Into<PathBuf>, storage_key: Option<&str>) -> Result<Self> {
        if let Some(key) = storage_key {
            validate_key(key)?;
        }

        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the expense home directory")?;
        let root = utils::canonicalize(&maybe_relative).await?;

        let config_path = root.join(CONFIG_JSON);
        if config_path.exists() {
            bail!(
                "A config file already exists at '{}'",
                config_path.display()
            )
        }

        let storage_dir = root.join(STORAGE);
        utils::make_dir(&storage_dir).await?;

        let config_file = ConfigFile {
            storage_key: storage_key.map(str::to_string),
            ..ConfigFile::default()
        };
        config_file.save(&config_path).await?;

        Ok(Self {
            root,
            config_path,
            storage_dir,
            config_file,
        })
    }

    /// This will
    /// - validate that `expense_home` exists and that the config file exists
    /// - load and validate the config file
    /// - validate that the storage directory exists
    /// - return the loaded configuration object
    pub async fn load(expense_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = expense_home.into();
        let root = utils::canonicalize(&maybe_relative)
            .await
            .context("The expense home directory is missing, run 'expenses init' first")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!(
                "The config file is missing '{}', run 'expenses init' first",
                config_path.display()
            )
        }
        let config_file = ConfigFile::load(&config_path).await?;

        let storage_dir = root.join(STORAGE);
        if !storage_dir.is_dir() {
            bail!(
                "The storage directory is missing '{}'",
                storage_dir.display()
            )
        }

        Ok(Self {
            root,
            config_path,
            storage_dir,
            config_file,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// The key the expense list is stored under.
    pub fn storage_key(&self) -> &str {
        self.config_file.storage_key()
    }

    /// Creates the file-backed storage facility.
    pub fn storage(&self) -> Result<FileStorage> {
        FileStorage::new(&self.storage_dir)
    }

    /// Loads the expense store. `today` dates the seed data if nothing usable is stored.
    pub fn open_store(&self, today: NaiveDate) -> Result<Store<FileStorage>> {
        Ok(Store::load(self.storage()?, self.storage_key(), today))
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "expenses",
///   "config_version": 1,
///   "storage_key": "expense-tracker-data"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "expenses"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// The storage key (optional). Defaults to `expense-tracker-data` if not specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    storage_key: Option<String>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            storage_key: None,
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if it holds an invalid value.
    async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: ConfigFile = utils::deserialize(path).await?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );
        anyhow::ensure!(
            config.config_version == CONFIG_VERSION,
            "Unsupported config_version {} in config file, expected {}",
            config.config_version,
            CONFIG_VERSION
        );
        if let Some(key) = &config.storage_key {
            validate_key(key)
                .with_context(|| format!("Invalid storage_key in {}", path.display()))?;
        }

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data)
            .await
            .context("Unable to write config file")
    }

    fn storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_KEY)
    }
}
