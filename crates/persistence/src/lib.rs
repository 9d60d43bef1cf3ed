// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the kmtrack vehicle maintenance tracker.
//!
//! State is kept as three independent JSON blobs in a key-value store:
//!
//! - `vehicleData` — the vehicle record (odometer and maintenance types)
//! - `changeHistory` — the service history, newest first, as a bare array
//! - `darkMode` — the theme preference as a JSON boolean
//!
//! Blob field names are camelCase.
//!
//! ## Backends
//!
//! - **Memory** — used for unit tests and runs without a data directory
//! - **File** — one JSON file per key in a data directory
//!
//! ## Missing and corrupt data
//!
//! A key that was never written loads as `None` and callers fall back to the
//! first-run defaults. A blob that exists but does not decode is an error;
//! it is never silently replaced.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod store;

#[cfg(test)]
mod tests;

use std::path::Path;

use kmtrack::State;
use kmtrack_domain::{Theme, VehicleRecord};
use kmtrack_history::HistoryLog;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

pub use error::PersistenceError;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreBackend};

/// Key of the vehicle record blob.
pub const VEHICLE_KEY: &str = "vehicleData";
/// Key of the service history blob.
pub const HISTORY_KEY: &str = "changeHistory";
/// Key of the theme preference blob.
pub const THEME_KEY: &str = "darkMode";

/// Persistence adapter for tracker state.
///
/// Works over any [`KeyValueStore`]; the default is the runtime-selected
/// [`StoreBackend`].
#[derive(Debug)]
pub struct Persistence<S: KeyValueStore = StoreBackend> {
    store: S,
}

impl Persistence<StoreBackend> {
    /// Creates a persistence adapter over an empty in-memory store.
    #[must_use]
    pub fn new_in_memory() -> Self {
        Self::new(StoreBackend::Memory(MemoryStore::new()))
    }

    /// Creates a persistence adapter over a data directory.
    ///
    /// # Arguments
    ///
    /// * `dir` - The data directory, created if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new_with_dir<P: AsRef<Path>>(dir: P) -> Result<Self, PersistenceError> {
        let store: FileStore = FileStore::open(dir)?;
        info!(dir = %store.dir().display(), "Opened file store");
        Ok(Self::new(StoreBackend::File(store)))
    }
}

impl<S: KeyValueStore> Persistence<S> {
    /// Creates a persistence adapter over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Loads the vehicle record, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the blob does not decode.
    pub fn load_vehicle(&self) -> Result<Option<VehicleRecord>, PersistenceError> {
        self.load_json(VEHICLE_KEY)
    }

    /// Saves the vehicle record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    pub fn save_vehicle(&mut self, vehicle: &VehicleRecord) -> Result<(), PersistenceError> {
        self.save_json(VEHICLE_KEY, vehicle)
    }

    /// Loads the service history, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the blob does not decode.
    pub fn load_history(&self) -> Result<Option<HistoryLog>, PersistenceError> {
        self.load_json(HISTORY_KEY)
    }

    /// Saves the service history.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be encoded or written.
    pub fn save_history(&mut self, history: &HistoryLog) -> Result<(), PersistenceError> {
        self.save_json(HISTORY_KEY, history)
    }

    /// Loads the theme preference, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the blob is not a boolean.
    pub fn load_theme(&self) -> Result<Option<Theme>, PersistenceError> {
        self.load_json(THEME_KEY)
    }

    /// Saves the theme preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be written.
    pub fn save_theme(&mut self, theme: Theme) -> Result<(), PersistenceError> {
        self.save_json(THEME_KEY, &theme)
    }

    /// Loads the full tracker state, falling back to first-run defaults for
    /// anything that was never saved.
    ///
    /// # Errors
    ///
    /// Returns an error if any stored blob cannot be read or decoded.
    pub fn load_state(&self) -> Result<State, PersistenceError> {
        let vehicle: VehicleRecord = self.load_vehicle()?.unwrap_or_else(VehicleRecord::seed);
        let history: HistoryLog = self.load_history()?.unwrap_or_default();
        Ok(State::new(vehicle, history))
    }

    /// Saves the vehicle record and the service history.
    ///
    /// # Errors
    ///
    /// Returns the first failure; the history is not written if the vehicle
    /// record fails.
    pub fn save_state(&mut self, state: &State) -> Result<(), PersistenceError> {
        self.save_vehicle(&state.vehicle)?;
        self.save_history(&state.history)
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistenceError> {
        let Some(blob) = self.store.load(key)? else {
            info!(key, "No stored value, using default");
            return Ok(None);
        };
        debug!(key, bytes = blob.len(), "Loaded blob");
        serde_json::from_str(&blob)
            .map(Some)
            .map_err(|err| PersistenceError::SerializationError(format!("{key}: {err}")))
    }

    fn save_json<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), PersistenceError> {
        let blob: String = serde_json::to_string(value)?;
        self.store.save(key, &blob)?;
        debug!(key, bytes = blob.len(), "Saved blob");
        Ok(())
    }
}
