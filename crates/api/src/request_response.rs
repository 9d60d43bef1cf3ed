// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Numeric form fields arrive as raw text and are parsed at this boundary.

use kmtrack_domain::{
    DueStatus, MaintenanceProgress, MaintenanceType, StatusSummary, Theme, compute_progress,
};
use kmtrack_history::HistoryEntry;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// API request to report a new odometer reading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UpdateOdometerRequest {
    /// The new reading, as typed.
    pub km: String,
}

/// API request to add a fixed distance to the odometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddKilometersRequest {
    /// Distance to add.
    pub amount: u32,
}

/// API request to confirm that one maintenance type was serviced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordServiceRequest {
    /// The serviced maintenance type.
    pub maintenance_id: String,
    /// Odometer reading at the service, as typed.
    pub km: String,
}

/// API request to confirm several maintenance types serviced together.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordServiceBatchRequest {
    /// The serviced maintenance types. Unknown identifiers are skipped.
    pub maintenance_ids: Vec<String>,
    /// Odometer reading at the service, as typed.
    pub km: String,
}

/// API request to confirm every item that is due at a reading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordDueServicesRequest {
    /// Odometer reading at the service, as typed.
    pub km: String,
}

/// API request to start tracking a new maintenance type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddMaintenanceTypeRequest {
    /// Display label.
    pub name: String,
    /// Icon tag (e.g. `droplet`).
    pub icon: String,
    /// Color tag (e.g. `blue`).
    pub color: String,
    /// Service interval, as typed.
    pub interval: String,
}

/// API request to edit a maintenance type. Omitted fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct UpdateMaintenanceTypeRequest {
    /// New display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New icon tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// New color tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// New service interval, as typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

/// API request to choose the display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SetThemeRequest {
    /// True for the dark theme.
    pub dark: bool,
}

/// Response for every state-changing operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WriteResponse {
    /// Whether the operation was applied.
    pub success: bool,
    /// A human-readable outcome.
    pub message: String,
    /// Whether the new state reached the store. The change is kept in memory either way.
    pub persisted: bool,
}

/// One maintenance type with its computed progress.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MaintenanceStatusInfo {
    /// Identifier.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Icon tag.
    pub icon: String,
    /// Color tag.
    pub color: String,
    /// Service interval.
    pub interval: u32,
    /// Odometer reading at the last service.
    pub last_change_km: u32,
    /// Distance travelled since the last service.
    pub distance_since_service: u32,
    /// Progress towards the next service, `0..=100`.
    ///
    /// This and the remaining progress fields are `None` when the item cannot
    /// be classified (a stored zero interval).
    pub progress_percent: Option<f64>,
    /// Progress rounded for display.
    pub rounded_percent: Option<u8>,
    /// Distance before the item is due.
    pub distance_remaining: Option<u32>,
    /// Status tier.
    pub status: Option<DueStatus>,
    /// Badge text for the status tier.
    pub status_label: Option<String>,
}

impl MaintenanceStatusInfo {
    /// Builds the display row for `maintenance` at `current_km`.
    ///
    /// An item whose progress cannot be computed is still listed, without
    /// progress or status.
    #[must_use]
    pub fn new(maintenance: &MaintenanceType, current_km: u32) -> Self {
        let progress: Option<MaintenanceProgress> = compute_progress(current_km, maintenance).ok();
        Self {
            id: maintenance.id.value().to_string(),
            name: maintenance.name.clone(),
            icon: maintenance.icon.to_string(),
            color: maintenance.color.to_string(),
            interval: maintenance.interval,
            last_change_km: maintenance.last_change_km,
            distance_since_service: current_km.saturating_sub(maintenance.last_change_km),
            progress_percent: progress.map(|p| p.progress_percent),
            rounded_percent: progress.as_ref().map(MaintenanceProgress::rounded_percent),
            distance_remaining: progress.map(|p| p.distance_remaining),
            status: progress.map(|p| p.status),
            status_label: progress.map(|p| p.status.label().to_string()),
        }
    }
}

/// The dashboard: odometer, per-item status and the due summary.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardResponse {
    /// Current odometer reading.
    pub current_km: u32,
    /// Maintenance types in display order.
    pub maintenance: Vec<MaintenanceStatusInfo>,
    /// Identifiers of items in the `Due` tier.
    pub due_ids: Vec<String>,
    /// Whether the confirm-all action should be offered.
    pub offer_batch_service: bool,
    /// Item counts per status tier.
    pub summary: StatusSummary,
}

/// One history entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryEntryInfo {
    /// Entry identifier.
    pub id: String,
    /// When the entry was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Odometer reading of the service.
    pub km: u32,
    /// Identifier of the serviced maintenance type.
    pub maintenance_id: String,
    /// Name of the maintenance type when the entry was recorded.
    pub maintenance_name: String,
}

impl From<&HistoryEntry> for HistoryEntryInfo {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id.clone(),
            date: entry.date,
            km: entry.km,
            maintenance_id: entry.maintenance_id.value().to_string(),
            maintenance_name: entry.maintenance_name.clone(),
        }
    }
}

/// The service history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryResponse {
    /// The entries, newest first.
    pub entries: Vec<HistoryEntryInfo>,
}

/// The current theme preference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeResponse {
    /// True for the dark theme.
    pub dark: bool,
    /// Theme name, `light` or `dark`.
    pub theme: String,
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self {
            dark: theme.is_dark(),
            theme: theme.to_string(),
        }
    }
}
