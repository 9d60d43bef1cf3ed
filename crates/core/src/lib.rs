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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use kmtrack_domain::{DomainError, MaintenanceId, items_due};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{State, TransitionResult};

/// Validates that a maintenance type exists in the state.
///
/// This is a read-only check that records nothing.
///
/// # Errors
///
/// Returns `DomainError::UnknownMaintenance` if no maintenance type has the identifier.
pub fn validate_maintenance_exists(state: &State, id: &MaintenanceId) -> Result<(), DomainError> {
    if !state.vehicle.contains(id) {
        return Err(DomainError::UnknownMaintenance(id.clone()));
    }
    Ok(())
}

/// Builds the batch command that confirms every item currently due.
///
/// Items are evaluated against the stored odometer, so only the items the
/// dashboard lists as due are serviced. The batch is recorded at `km`, which
/// also moves the odometer; with nothing due the command only does that.
#[must_use]
pub fn due_service_command(state: &State, km: u32) -> Command {
    Command::RecordServiceBatch {
        maintenance_ids: items_due(state.current_km(), &state.vehicle.maintenance_types),
        km,
    }
}
