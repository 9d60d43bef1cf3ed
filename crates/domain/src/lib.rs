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

mod due;
mod error;
mod theme;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use due::{
    DueStatus, MaintenanceProgress, StatusSummary, WARNING_THRESHOLD_PERCENT, classify,
    compute_progress, items_due, offers_batch_service, status_summary,
};
pub use error::DomainError;
pub use theme::Theme;
pub use types::{Color, Icon, MaintenanceId, MaintenanceType, MaintenanceUpdate, VehicleRecord};
pub use validation::{
    parse_interval, parse_kilometers, validate_interval, validate_name,
    validate_odometer_advance,
};
