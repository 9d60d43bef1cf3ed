// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kmtrack_domain::{MaintenanceId, MaintenanceType, VehicleRecord};
use kmtrack_history::{HistoryEntry, HistoryLog};

/// The complete tracked state: the vehicle record and its service history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    /// The vehicle, its odometer and its maintenance types.
    pub vehicle: VehicleRecord,
    /// The most recent services, newest first.
    pub history: HistoryLog,
}

impl State {
    /// Creates a new state from its parts.
    ///
    /// # Arguments
    ///
    /// * `vehicle` - The vehicle record
    /// * `history` - The service history
    #[must_use]
    pub const fn new(vehicle: VehicleRecord, history: HistoryLog) -> Self {
        Self { vehicle, history }
    }

    /// The first-run state: seeded vehicle, empty history.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(VehicleRecord::seed(), HistoryLog::new())
    }

    /// Returns the current odometer reading.
    #[must_use]
    pub const fn current_km(&self) -> u32 {
        self.vehicle.current_km
    }

    /// Looks up a maintenance type by identifier.
    #[must_use]
    pub fn maintenance(&self, id: &MaintenanceId) -> Option<&MaintenanceType> {
        self.vehicle.find(id)
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// History entries added by this transition, in recording order.
    pub recorded: Vec<HistoryEntry>,
}
