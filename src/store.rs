//! The per-application config store.
//!
//! A [`ConfigStore`] owns its [`StoreSettings`] and an optional cached copy of
//! the document. Every method does plain blocking file I/O. There is no
//! locking: two stores pointed at the same file race, and the last full-file
//! write wins. Writes overwrite the file in place rather than through a temp
//! file and rename.
//!
//! Read and write methods assume [`ConfigStore::setup`] has run. Called
//! earlier, they fail with whatever the file access reports, usually a
//! not-found I/O error (see [`crate::StoreError::is_not_found`]).

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::config::io::{read_json, read_object, shallow_merge, to_object, write_json};
use crate::config::path::{config_dir, config_path, create_config_dir};
use crate::error::{Result, StoreError};
use crate::models::StoreSettings;

/// JSON document store for one application.
///
/// `T` is the document shape. It must serialize to a JSON object; the default
/// is an untyped `serde_json` map.
#[derive(Debug, Clone)]
pub struct ConfigStore<T = Map<String, Value>> {
    settings: StoreSettings,
    cache: Option<T>,
}

impl<T> ConfigStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Build a store. No I/O happens until [`setup`](Self::setup).
    pub fn new(settings: StoreSettings) -> Self {
        Self { settings, cache: None }
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn config_dir(&self) -> Result<PathBuf> {
        config_dir(&self.settings)
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        config_path(&self.settings)
    }

    /// Make sure the directory and file exist, then load the file.
    ///
    /// `initial` (or `{}`) is written only when the file has to be created.
    /// An existing file is never overwritten, so calling this again with a
    /// different `initial` changes nothing on disk.
    pub fn setup(&mut self, initial: Option<T>) -> Result<()> {
        let dir = self.config_dir()?;
        let file = dir.join(&self.settings.config_file_name);

        if !dir.exists() {
            create_config_dir(&dir)?;
            create_config_file(&file, initial.as_ref())?;
        } else if !file.exists() {
            create_config_file(&file, initial.as_ref())?;
        } else {
            debug!(path = %file.display(), "config file already present");
        }

        self.cache = Some(read_json(&file)?);
        Ok(())
    }

    /// Current document: the cached copy, or the file on first access.
    pub fn get_config(&mut self) -> Result<&T> {
        let config = match self.cache.take() {
            Some(c) => {
                trace!("config cache hit");
                c
            }
            None => read_json(&self.config_path()?)?,
        };
        Ok(&*self.cache.insert(config))
    }

    /// Drop the cache and read the file again.
    ///
    /// The cache is never invalidated on its own; this is how a caller picks
    /// up changes made by another process.
    pub fn reload(&mut self) -> Result<&T> {
        self.cache = None;
        self.get_config()
    }

    /// Merge `partial`'s top-level keys into the persisted document.
    pub fn write_config<P>(&mut self, partial: &P) -> Result<()>
    where
        P: Serialize + ?Sized,
    {
        self.write_config_with(partial, true)
    }

    /// Write `partial` to the file.
    ///
    /// With `merge`, keys of `partial` replace same-named keys of the
    /// persisted document and other keys are kept. Without it, `partial`
    /// becomes the whole document. A document that no longer deserializes as
    /// `T` is rejected with a parse error and the file is left as it was.
    /// Otherwise the file is re-read to refresh the cache.
    pub fn write_config_with<P>(&mut self, partial: &P, merge: bool) -> Result<()>
    where
        P: Serialize + ?Sized,
    {
        let path = self.config_path()?;
        let partial = to_object(partial)?;

        let document = if merge {
            let mut current = read_object(&path)?;
            shallow_merge(&mut current, partial);
            current
        } else {
            partial
        };

        // The new document must still fit `T`; reject it before touching the file.
        serde_json::from_value::<T>(Value::Object(document.clone())).map_err(|source| {
            StoreError::Parse {
                path: path.clone(),
                source,
            }
        })?;

        write_json(&path, &document)?;
        self.cache = None;
        self.cache = Some(read_json(&path)?);
        Ok(())
    }

    /// Delete a top-level key. Absent keys are not an error.
    pub fn remove_config_value(&mut self, key: &str) -> Result<()> {
        let path = self.config_path()?;
        let mut current = read_object(&path)?;
        if current.shift_remove(key).is_none() {
            debug!(key, "key not present, rewriting unchanged");
        }
        self.write_config_with(&current, false)
    }

    /// One top-level value straight from the file, bypassing the cache.
    pub fn get_value(&self, key: &str) -> Result<Option<Value>> {
        let mut current = read_object(&self.config_path()?)?;
        Ok(current.shift_remove(key))
    }
}

fn create_config_file<T: Serialize>(file: &Path, initial: Option<&T>) -> Result<()> {
    let document = match initial {
        Some(value) => to_object(value)?,
        None => Map::new(),
    };
    debug!(path = %file.display(), keys = document.len(), "creating config file");
    write_json(file, &document)
}
