// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The vehicle state manager.
//!
//! `Tracker` owns the current state, turns requests into commands, applies
//! them through the core, and writes every successful transition back to
//! the store.

use std::str::FromStr;

use kmtrack::{Command, State, TransitionResult, apply, due_service_command};
use kmtrack_domain::{
    Color, DomainError, Icon, MaintenanceId, MaintenanceUpdate, Theme, VehicleRecord, items_due,
    offers_batch_service, parse_interval, parse_kilometers, status_summary,
};
use kmtrack_history::HistoryLog;
use kmtrack_persistence::{KeyValueStore, Persistence, StoreBackend};
use time::OffsetDateTime;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::request_response::{
    AddKilometersRequest, AddMaintenanceTypeRequest, DashboardResponse, HistoryEntryInfo,
    HistoryResponse, MaintenanceStatusInfo, RecordDueServicesRequest, RecordServiceBatchRequest,
    RecordServiceRequest, SetThemeRequest, ThemeResponse, UpdateMaintenanceTypeRequest,
    UpdateOdometerRequest, WriteResponse,
};

/// Owns the tracked state and its persistence.
#[derive(Debug)]
pub struct Tracker<S: KeyValueStore = StoreBackend> {
    state: State,
    theme: Theme,
    persistence: Persistence<S>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Loads the stored state, falling back to first-run defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored blob cannot be read or decoded. The store
    /// is left untouched in that case.
    pub fn open(persistence: Persistence<S>) -> Result<Self, ApiError> {
        let state: State = persistence.load_state().inspect_err(|err| {
            error!(error = %err, "Failed to load stored state");
        })?;
        let theme: Theme = persistence
            .load_theme()
            .inspect_err(|err| error!(error = %err, "Failed to load theme preference"))?
            .unwrap_or_default();

        info!(
            current_km = state.current_km(),
            maintenance_types = state.vehicle.maintenance_types.len(),
            history_entries = state.history.len(),
            theme = %theme,
            "Tracker opened"
        );

        Ok(Self {
            state,
            theme,
            persistence,
        })
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Returns the underlying persistence adapter.
    #[must_use]
    pub const fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Returns a snapshot of the vehicle record.
    #[must_use]
    pub fn vehicle(&self) -> VehicleRecord {
        self.state.vehicle.clone()
    }

    /// Returns a snapshot of the service history.
    #[must_use]
    pub fn history(&self) -> HistoryLog {
        self.state.history.clone()
    }

    /// Returns the service history as a response.
    #[must_use]
    pub fn history_response(&self) -> HistoryResponse {
        HistoryResponse {
            entries: self
                .state
                .history
                .entries()
                .iter()
                .map(HistoryEntryInfo::from)
                .collect(),
        }
    }

    /// Computes the dashboard for the current odometer reading.
    ///
    /// Every maintenance type is listed. One that cannot be classified is
    /// listed without progress and is left out of the due list and summary.
    #[must_use]
    pub fn dashboard(&self) -> DashboardResponse {
        let current_km: u32 = self.state.current_km();
        let types = &self.state.vehicle.maintenance_types;

        DashboardResponse {
            current_km,
            maintenance: types
                .iter()
                .map(|m| MaintenanceStatusInfo::new(m, current_km))
                .collect(),
            due_ids: items_due(current_km, types)
                .iter()
                .map(|id| id.value().to_string())
                .collect(),
            offer_batch_service: offers_batch_service(current_km, types),
            summary: status_summary(current_km, types),
        }
    }

    /// Reports a new odometer reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the reading is not a number or is lower than the current one.
    pub fn update_odometer(
        &mut self,
        request: &UpdateOdometerRequest,
    ) -> Result<WriteResponse, ApiError> {
        let km: u32 = parse_kilometers(&request.km)?;
        self.execute(
            Command::UpdateOdometer { km },
            format!("Odometer updated to {km} km"),
        )
    }

    /// Adds a fixed distance to the odometer.
    ///
    /// # Errors
    ///
    /// Returns an error if the sum does not fit an odometer reading.
    pub fn add_kilometers(
        &mut self,
        request: &AddKilometersRequest,
    ) -> Result<WriteResponse, ApiError> {
        let km: u32 = self
            .state
            .current_km()
            .checked_add(request.amount)
            .ok_or_else(|| {
                DomainError::InvalidKilometers(format!(
                    "adding {} km exceeds the maximum reading",
                    request.amount
                ))
            })?;
        self.execute(
            Command::UpdateOdometer { km },
            format!("Odometer updated to {km} km"),
        )
    }

    /// Confirms that one maintenance type was serviced.
    ///
    /// # Errors
    ///
    /// Returns an error if the reading is invalid or regressive, or the
    /// maintenance type does not exist.
    pub fn record_service(
        &mut self,
        request: &RecordServiceRequest,
    ) -> Result<WriteResponse, ApiError> {
        let km: u32 = parse_kilometers(&request.km)?;
        let maintenance_id: MaintenanceId = MaintenanceId::new(&request.maintenance_id);
        let name: String = self
            .state
            .maintenance(&maintenance_id)
            .map_or_else(|| request.maintenance_id.clone(), |m| m.name.clone());
        self.execute(
            Command::RecordService { maintenance_id, km },
            format!("{name} service recorded at {km} km"),
        )
    }

    /// Confirms several maintenance types serviced together.
    ///
    /// # Errors
    ///
    /// Returns an error if the reading is invalid or regressive.
    pub fn record_service_batch(
        &mut self,
        request: &RecordServiceBatchRequest,
    ) -> Result<WriteResponse, ApiError> {
        let km: u32 = parse_kilometers(&request.km)?;
        let maintenance_ids: Vec<MaintenanceId> = request
            .maintenance_ids
            .iter()
            .map(|id| MaintenanceId::new(id))
            .collect();
        self.execute_batch(
            Command::RecordServiceBatch {
                maintenance_ids,
                km,
            },
            km,
        )
    }

    /// Confirms every maintenance type that is due at the current reading,
    /// recording the services at the given reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the reading is invalid or regressive.
    pub fn record_due_services(
        &mut self,
        request: &RecordDueServicesRequest,
    ) -> Result<WriteResponse, ApiError> {
        let km: u32 = parse_kilometers(&request.km)?;
        self.execute_batch(due_service_command(&self.state, km), km)
    }

    /// Starts tracking a new maintenance type.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, the interval is not a positive
    /// number, or the icon or color is unknown.
    pub fn add_maintenance_type(
        &mut self,
        request: &AddMaintenanceTypeRequest,
    ) -> Result<WriteResponse, ApiError> {
        let icon: Icon = Icon::from_str(&request.icon)?;
        let color: Color = Color::from_str(&request.color)?;
        let interval: u32 = parse_interval(&request.interval)?;
        let name: String = request.name.trim().to_string();
        self.execute(
            Command::AddMaintenanceType {
                name: request.name.clone(),
                icon,
                color,
                interval,
            },
            format!("Maintenance type '{name}' added"),
        )
    }

    /// Edits the supplied fields of a maintenance type.
    ///
    /// # Errors
    ///
    /// Returns an error if the maintenance type does not exist or a supplied
    /// field is invalid.
    pub fn update_maintenance_type(
        &mut self,
        id: &str,
        request: &UpdateMaintenanceTypeRequest,
    ) -> Result<WriteResponse, ApiError> {
        let update: MaintenanceUpdate = MaintenanceUpdate {
            name: request.name.clone(),
            icon: request.icon.as_deref().map(Icon::from_str).transpose()?,
            color: request.color.as_deref().map(Color::from_str).transpose()?,
            interval: request.interval.as_deref().map(parse_interval).transpose()?,
        };
        self.execute(
            Command::UpdateMaintenanceType {
                id: MaintenanceId::new(id),
                update,
            },
            String::from("Maintenance type updated"),
        )
    }

    /// Stops tracking a maintenance type. Unknown identifiers are a no-op.
    ///
    /// # Errors
    ///
    /// This operation only fails if the command itself is rejected, which
    /// deletion never is.
    pub fn delete_maintenance_type(&mut self, id: &str) -> Result<WriteResponse, ApiError> {
        let maintenance_id: MaintenanceId = MaintenanceId::new(id);
        let message: String = if self.state.vehicle.contains(&maintenance_id) {
            String::from("Maintenance type deleted")
        } else {
            format!("Maintenance type '{id}' does not exist; nothing to delete")
        };
        self.execute(
            Command::DeleteMaintenanceType { id: maintenance_id },
            message,
        )
    }

    /// Returns the current theme preference.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Sets the theme preference.
    pub fn set_theme(&mut self, request: SetThemeRequest) -> WriteResponse {
        self.store_theme(Theme::from(request.dark))
    }

    /// Switches between the light and dark themes.
    pub fn toggle_theme(&mut self) -> WriteResponse {
        self.store_theme(self.theme.toggled())
    }

    /// Returns the theme preference as a response.
    #[must_use]
    pub fn theme_response(&self) -> ThemeResponse {
        ThemeResponse::from(self.theme)
    }

    fn store_theme(&mut self, theme: Theme) -> WriteResponse {
        self.theme = theme;
        info!(theme = %theme, "Theme changed");
        let persisted: bool = self
            .persistence
            .save_theme(theme)
            .inspect_err(|err| error!(error = %err, "Failed to persist theme preference"))
            .is_ok();
        WriteResponse {
            success: true,
            message: format!("Theme set to {theme}"),
            persisted,
        }
    }

    fn execute_batch(&mut self, command: Command, km: u32) -> Result<WriteResponse, ApiError> {
        let name: &'static str = command.name();
        let result: TransitionResult = self.transition(command)?;
        let message: String = if result.recorded.is_empty() {
            format!("Odometer updated to {km} km; no maintenance types matched")
        } else {
            let names: Vec<&str> = result
                .recorded
                .iter()
                .map(|e| e.maintenance_name.as_str())
                .collect();
            format!("Services recorded at {km} km: {}", names.join(", "))
        };
        Ok(self.commit(name, result, message))
    }

    fn execute(&mut self, command: Command, message: String) -> Result<WriteResponse, ApiError> {
        let name: &'static str = command.name();
        let result: TransitionResult = self.transition(command)?;
        Ok(self.commit(name, result, message))
    }

    fn transition(&self, command: Command) -> Result<TransitionResult, ApiError> {
        let name: &'static str = command.name();
        apply(&self.state, command, OffsetDateTime::now_utc()).map_err(|err| {
            warn!(command = name, error = %err, "Command rejected");
            ApiError::from(err)
        })
    }

    fn commit(
        &mut self,
        command: &'static str,
        result: TransitionResult,
        message: String,
    ) -> WriteResponse {
        self.state = result.new_state;
        info!(
            command,
            current_km = self.state.current_km(),
            recorded = result.recorded.len(),
            outcome = %message,
            "Command applied"
        );

        let persisted: bool = self
            .persistence
            .save_state(&self.state)
            .inspect_err(|err| {
                error!(error = %err, "Failed to persist state; change kept in memory");
            })
            .is_ok();

        WriteResponse {
            success: true,
            message,
            persisted,
        }
    }
}
