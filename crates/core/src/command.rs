// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kmtrack_domain::{Color, Icon, MaintenanceId, MaintenanceUpdate};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Report a new odometer reading.
    UpdateOdometer {
        /// The new reading.
        km: u32,
    },
    /// Confirm that one maintenance type was serviced.
    RecordService {
        /// The serviced maintenance type.
        maintenance_id: MaintenanceId,
        /// The odometer reading at the service.
        km: u32,
    },
    /// Confirm that several maintenance types were serviced together.
    ///
    /// Identifiers that no longer exist are skipped.
    RecordServiceBatch {
        /// The serviced maintenance types.
        maintenance_ids: Vec<MaintenanceId>,
        /// The odometer reading at the service.
        km: u32,
    },
    /// Start tracking a new maintenance type.
    AddMaintenanceType {
        /// Display label; trimmed before storing.
        name: String,
        /// Presentation icon.
        icon: Icon,
        /// Presentation color.
        color: Color,
        /// Distance between services.
        interval: u32,
    },
    /// Edit some fields of an existing maintenance type.
    UpdateMaintenanceType {
        /// The maintenance type to edit.
        id: MaintenanceId,
        /// The fields to change.
        update: MaintenanceUpdate,
    },
    /// Stop tracking a maintenance type. History is kept.
    DeleteMaintenanceType {
        /// The maintenance type to remove.
        id: MaintenanceId,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UpdateOdometer { .. } => "UpdateOdometer",
            Self::RecordService { .. } => "RecordService",
            Self::RecordServiceBatch { .. } => "RecordServiceBatch",
            Self::AddMaintenanceType { .. } => "AddMaintenanceType",
            Self::UpdateMaintenanceType { .. } => "UpdateMaintenanceType",
            Self::DeleteMaintenanceType { .. } => "DeleteMaintenanceType",
        }
    }
}
