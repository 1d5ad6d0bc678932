use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::models::StoreSettings;

/// Home directory the settings resolve against.
pub fn home_dir(settings: &StoreSettings) -> Result<PathBuf> {
    match &settings.home {
        Some(h) => Ok(h.clone()),
        None => dirs::home_dir().ok_or(StoreError::NoHomeDir),
    }
}

/// `<home>/<prefix><app_name>`
pub fn config_dir(settings: &StoreSettings) -> Result<PathBuf> {
    Ok(home_dir(settings)?.join(settings.dir_name()))
}

/// `<home>/<prefix><app_name>/<config_file_name>`
pub fn config_path(settings: &StoreSettings) -> Result<PathBuf> {
    Ok(config_dir(settings)?.join(&settings.config_file_name))
}

/// Create the config directory. Single level only: a missing parent is an error.
pub fn create_config_dir(dir: &Path) -> Result<()> {
    debug!(dir = %dir.display(), "creating config directory");
    std::fs::create_dir(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })
}
