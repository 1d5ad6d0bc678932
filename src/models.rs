use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where an application's config file lives.
///
/// Only `app_name` is required. The directory is `<home>/<prefix><app_name>`
/// and the file is `<config_file_name>` inside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreSettings {
    /// Application identifier, used to build the directory name
    pub app_name: String,
    /// File name inside the directory (default `config.json`)
    #[serde(default = "default_config_file_name")]
    pub config_file_name: String,
    /// Prepended to `app_name` (default `.`, i.e. a hidden directory)
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Home directory override. `None` means the platform home directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<PathBuf>,
}

impl StoreSettings {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            config_file_name: default_config_file_name(),
            prefix: default_prefix(),
            home: None,
        }
    }

    pub fn with_config_file_name(mut self, name: impl Into<String>) -> Self {
        self.config_file_name = name.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Resolve paths against `home` instead of the user's home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Directory name relative to home, e.g. `.myapp`.
    pub fn dir_name(&self) -> String {
        format!("{}{}", self.prefix, self.app_name)
    }
}

fn default_config_file_name() -> String { "config.json".to_string() }
fn default_prefix() -> String { ".".to_string() }
