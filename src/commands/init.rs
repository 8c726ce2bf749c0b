use crate::commands::Out;
use crate::{Config, Result};
use anyhow::Context;
use std::path::Path;

/// Creates the data directory, its storage directory and an initial `config.json` file.
///
/// # Arguments
/// - `expense_home` - The directory that will be the root of data directory, e.g.
///   `$HOME/expenses`
/// - `storage_key` - The key to store the expense list under, or `None` for the default.
///
/// # Errors
/// - Returns an error if the key is invalid, if the directory was already initialized, or if any
///   file operations fail.
pub async fn init(expense_home: &Path, storage_key: Option<&str>) -> Result<Out<()>> {
    let config = Config::create(expense_home, storage_key)
        .await
        .context("Unable to create the data directory and config")?;
    Ok(format!(
        "Successfully created the expenses directory at {}",
        config.root().display()
    )
    .into())
}
