// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Due-status computation for maintenance types.
//!
//! Everything here is a pure function of the current odometer reading and a
//! maintenance type. Status tiers are decided on the unclamped ratio of
//! distance travelled to interval, using integer arithmetic so the 80% and
//! 100% boundaries are exact. The clamped percentage exists for display only.

use crate::error::DomainError;
use crate::types::{MaintenanceId, MaintenanceType};
use serde::{Deserialize, Serialize};

/// Ratio (in percent) at which an item becomes `Warning`.
pub const WARNING_THRESHOLD_PERCENT: u64 = 80;

/// How close a maintenance type is to needing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    /// Less than 80% of the interval has elapsed.
    Ok,
    /// At least 80% but less than 100% of the interval has elapsed.
    Warning,
    /// The full interval has elapsed; a change is required.
    Due,
}

impl DueStatus {
    /// Returns the machine-readable status string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Due => "due",
        }
    }

    /// Returns the badge text shown next to an item.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "Upcoming",
            Self::Due => "Change required",
        }
    }
}

impl std::fmt::Display for DueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Computed progress of one maintenance type at a given odometer reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceProgress {
    /// Distance travelled since the last service.
    pub distance_since_service: u32,
    /// Progress towards the next service, clamped to `0..=100`.
    pub progress_percent: f64,
    /// Distance left before the item is due; zero once due.
    pub distance_remaining: u32,
    /// Status tier from the unclamped ratio.
    pub status: DueStatus,
}

impl MaintenanceProgress {
    /// Progress rounded to the nearest whole percent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_percent(&self) -> u8 {
        // progress_percent is clamped to 0..=100
        self.progress_percent.round() as u8
    }
}

/// Counts of maintenance types per status tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusSummary {
    /// Items in the `Ok` tier.
    pub ok: usize,
    /// Items in the `Warning` tier.
    pub warning: usize,
    /// Items in the `Due` tier.
    pub due: usize,
}

/// Decides the status tier for a distance and interval.
///
/// # Errors
///
/// Returns `DomainError::InvalidInterval` if `interval` is zero.
pub fn classify(distance_since_service: u32, interval: u32) -> Result<DueStatus, DomainError> {
    if interval == 0 {
        return Err(DomainError::InvalidInterval(String::from(
            "Interval must be greater than zero",
        )));
    }

    let distance: u64 = u64::from(distance_since_service);
    let interval: u64 = u64::from(interval);

    // r >= 100  <=>  distance >= interval
    if distance >= interval {
        return Ok(DueStatus::Due);
    }
    // r >= 80   <=>  distance * 100 >= interval * 80
    if distance * 100 >= interval * WARNING_THRESHOLD_PERCENT {
        return Ok(DueStatus::Warning);
    }
    Ok(DueStatus::Ok)
}

/// Computes progress for one maintenance type.
///
/// A `last_change_km` ahead of `current_km` (possible only in hand-edited
/// stored data) counts as zero distance travelled.
///
/// # Arguments
///
/// * `current_km` - The vehicle's current odometer reading
/// * `maintenance` - The maintenance type to evaluate
///
/// # Errors
///
/// Returns `DomainError::InvalidInterval` if the maintenance type has a
/// zero interval.
pub fn compute_progress(
    current_km: u32,
    maintenance: &MaintenanceType,
) -> Result<MaintenanceProgress, DomainError> {
    let interval: u32 = maintenance.interval;
    let distance_since_service: u32 = current_km.saturating_sub(maintenance.last_change_km);
    let status: DueStatus = classify(distance_since_service, interval)?;

    let ratio: f64 = f64::from(distance_since_service) / f64::from(interval) * 100.0;
    let progress_percent: f64 = ratio.min(100.0);
    let distance_remaining: u32 = interval.saturating_sub(distance_since_service);

    Ok(MaintenanceProgress {
        distance_since_service,
        progress_percent,
        distance_remaining,
        status,
    })
}

/// Returns the identifiers of every `Due` maintenance type, in input order.
///
/// Items with an invalid interval cannot be classified and are skipped.
#[must_use]
pub fn items_due(current_km: u32, items: &[MaintenanceType]) -> Vec<MaintenanceId> {
    items
        .iter()
        .filter(|item| {
            matches!(
                compute_progress(current_km, item).map(|p| p.status),
                Ok(DueStatus::Due)
            )
        })
        .map(|item| item.id.clone())
        .collect()
}

/// Returns true when the confirm-all action should be offered.
#[must_use]
pub fn offers_batch_service(current_km: u32, items: &[MaintenanceType]) -> bool {
    items_due(current_km, items).len() > 1
}

/// Counts maintenance types per status tier.
///
/// Items with an invalid interval are not counted.
#[must_use]
pub fn status_summary(current_km: u32, items: &[MaintenanceType]) -> StatusSummary {
    items
        .iter()
        .filter_map(|item| compute_progress(current_km, item).ok())
        .fold(StatusSummary::default(), |mut summary, progress| {
            match progress.status {
                DueStatus::Ok => summary.ok += 1,
                DueStatus::Warning => summary.warning += 1,
                DueStatus::Due => summary.due += 1,
            }
            summary
        })
}
