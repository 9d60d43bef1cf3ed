// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::MaintenanceId;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The odometer reading would move backwards.
    RegressiveOdometer {
        /// The odometer reading currently on record.
        current: u32,
        /// The rejected reading.
        attempted: u32,
    },
    /// No maintenance type with this identifier exists.
    UnknownMaintenance(MaintenanceId),
    /// A service interval is zero, negative, or not a number.
    InvalidInterval(String),
    /// A maintenance type name is blank after trimming.
    EmptyName,
    /// An odometer value is negative, not a number, or out of range.
    InvalidKilometers(String),
    /// An icon tag outside the supported set.
    UnknownIcon(String),
    /// A color tag outside the supported set.
    UnknownColor(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RegressiveOdometer { current, attempted } => {
                write!(
                    f,
                    "Odometer cannot go backwards: {attempted} km is less than the current {current} km"
                )
            }
            Self::UnknownMaintenance(id) => {
                write!(f, "Maintenance type '{}' not found", id.value())
            }
            Self::InvalidInterval(msg) => write!(f, "Invalid interval: {msg}"),
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidKilometers(msg) => write!(f, "Invalid kilometers: {msg}"),
            Self::UnknownIcon(icon) => write!(f, "Unknown icon: '{icon}'"),
            Self::UnknownColor(color) => write!(f, "Unknown color: '{color}'"),
        }
    }
}

impl std::error::Error for DomainError {}
