// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage backends.
//!
//! A store maps string keys to opaque text blobs. It knows nothing about
//! what the blobs contain; encoding lives in the `Persistence` adapter.
//!
//! ## Backends
//!
//! - `memory` — process-local map, used by tests and ephemeral runs
//! - `file` — one `<key>.json` file per key inside a data directory

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::PersistenceError;

/// A string-keyed blob store.
pub trait KeyValueStore {
    /// Reads the blob stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing has been stored under the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replaces the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError>;
}

/// Runtime selection between the available backends.
///
/// Backend selection happens once at construction time and is transparent to callers.
#[derive(Debug)]
pub enum StoreBackend {
    Memory(MemoryStore),
    File(FileStore),
}

impl KeyValueStore for StoreBackend {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match self {
            Self::Memory(store) => store.load(key),
            Self::File(store) => store.load(key),
        }
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        match self {
            Self::Memory(store) => store.save(key, blob),
            Self::File(store) => store.save(key, blob),
        }
    }
}
