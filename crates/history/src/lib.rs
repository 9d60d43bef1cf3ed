// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use kmtrack_domain::{MaintenanceId, MaintenanceType};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg(test)]
mod tests;

/// Maximum number of entries the history log retains.
pub const HISTORY_LIMIT: usize = 20;

/// An immutable record of one completed service.
///
/// The maintenance identifier and name are copied at recording time, so an
/// entry stays readable after its maintenance type is renamed or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique identifier for this entry.
    pub id: String,
    /// When the entry was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Odometer reading at which the service was done.
    pub km: u32,
    /// Identifier of the serviced maintenance type.
    pub maintenance_id: MaintenanceId,
    /// Name of the serviced maintenance type when the entry was recorded.
    pub maintenance_name: String,
}

impl HistoryEntry {
    /// Records a service of `maintenance` at `km`.
    ///
    /// # Arguments
    ///
    /// * `maintenance` - The maintenance type being serviced
    /// * `km` - The odometer reading of the service
    /// * `date` - When the service is being recorded
    #[must_use]
    pub fn record(maintenance: &MaintenanceType, km: u32, date: OffsetDateTime) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            km,
            maintenance_id: maintenance.id.clone(),
            maintenance_name: maintenance.name.clone(),
        }
    }
}

/// The most recent service entries, newest first.
///
/// Never holds more than [`HISTORY_LIMIT`] entries; recording past the limit
/// evicts the oldest. Serializes as a bare array of entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an entry as the newest, evicting past the limit.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
    }

    /// Returns the entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the newest entry, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Returns the entries recorded for one maintenance type, newest first.
    pub fn for_maintenance<'a>(
        &'a self,
        id: &'a MaintenanceId,
    ) -> impl Iterator<Item = &'a HistoryEntry> + 'a {
        self.entries.iter().filter(move |e| &e.maintenance_id == id)
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<HistoryEntry>> for HistoryLog {
    /// Builds a log from entries already ordered newest first.
    fn from(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_LIMIT);
        Self { entries }
    }
}

impl From<HistoryLog> for Vec<HistoryEntry> {
    fn from(log: HistoryLog) -> Self {
        log.entries
    }
}
