// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use kmtrack_persistence::{KeyValueStore, MemoryStore, Persistence, PersistenceError};

use crate::Tracker;

/// A store whose writes can be made to fail.
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_saves: bool,
}

impl KeyValueStore for FlakyStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.inner.load(key)
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        if self.fail_saves {
            return Err(PersistenceError::StorageError(String::from("disk full")));
        }
        self.inner.save(key, blob)
    }
}

/// A tracker over an empty in-memory store, i.e. the first-run state.
pub fn create_test_tracker() -> Tracker<MemoryStore> {
    Tracker::open(Persistence::new(MemoryStore::new())).unwrap()
}

/// A tracker over an empty store whose writes always fail.
pub fn create_failing_tracker() -> Tracker<FlakyStore> {
    Tracker::open(Persistence::new(FlakyStore {
        inner: MemoryStore::new(),
        fail_saves: true,
    }))
    .unwrap()
}

/// Reopens a tracker over a copy of another tracker's store.
pub fn reopen(tracker: &Tracker<MemoryStore>) -> Tracker<MemoryStore> {
    Tracker::open(Persistence::new(tracker.persistence().store().clone())).unwrap()
}
