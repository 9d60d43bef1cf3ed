// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Directory-backed store.
//!
//! Each key is kept in `<dir>/<key>.json`. Writes go to a sibling temporary
//! file that is then renamed over the target, so a reader never observes a
//! half-written blob.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::PersistenceError;

/// A store that keeps one JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Arguments
    ///
    /// * `dir` - The data directory
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or is not a directory.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, PersistenceError> {
        let dir: PathBuf = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|err| {
            PersistenceError::InitializationError(format!(
                "Cannot create data directory {}: {err}",
                dir.display()
            ))
        })?;
        if !dir.is_dir() {
            return Err(PersistenceError::InitializationError(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }

    /// Returns the data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that holds `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        let target: PathBuf = self.path_for(key);
        let staging: PathBuf = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&staging, blob)?;
        fs::rename(&staging, &target)?;
        Ok(())
    }
}
