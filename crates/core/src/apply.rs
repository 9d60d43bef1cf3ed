// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use kmtrack_domain::{
    Color, DomainError, Icon, MaintenanceId, MaintenanceType, MaintenanceUpdate, VehicleRecord,
    validate_interval, validate_name, validate_odometer_advance,
};
use kmtrack_history::{HistoryEntry, HistoryLog};
use std::collections::HashSet;
use time::OffsetDateTime;

/// Applies a command to the current state, producing a new state.
///
/// The input state is never modified. On error nothing has changed.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `recorded_at` - Timestamp given to any history entries this command records
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and any recorded entries
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - An odometer reading is lower than the current one
/// - A single-item command names an unknown maintenance type
/// - A name is blank or an interval is zero
pub fn apply(
    state: &State,
    command: Command,
    recorded_at: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::UpdateOdometer { km } => update_odometer(state, km),
        Command::RecordService { maintenance_id, km } => {
            record_service(state, &maintenance_id, km, recorded_at)
        }
        Command::RecordServiceBatch {
            maintenance_ids,
            km,
        } => record_service_batch(state, &maintenance_ids, km, recorded_at),
        Command::AddMaintenanceType {
            name,
            icon,
            color,
            interval,
        } => add_maintenance_type(state, &name, icon, color, interval),
        Command::UpdateMaintenanceType { id, update } => {
            update_maintenance_type(state, &id, update)
        }
        Command::DeleteMaintenanceType { id } => Ok(delete_maintenance_type(state, &id)),
    }
}

fn unchanged_history(state: &State, vehicle: VehicleRecord) -> TransitionResult {
    TransitionResult {
        new_state: State::new(vehicle, state.history.clone()),
        recorded: Vec::new(),
    }
}

fn update_odometer(state: &State, km: u32) -> Result<TransitionResult, CoreError> {
    validate_odometer_advance(state.current_km(), km)?;

    let vehicle: VehicleRecord =
        VehicleRecord::new(km, state.vehicle.maintenance_types.clone());
    Ok(unchanged_history(state, vehicle))
}

fn record_service(
    state: &State,
    maintenance_id: &MaintenanceId,
    km: u32,
    recorded_at: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    validate_odometer_advance(state.current_km(), km)?;

    if state.maintenance(maintenance_id).is_none() {
        return Err(CoreError::DomainViolation(DomainError::UnknownMaintenance(
            maintenance_id.clone(),
        )));
    }

    Ok(service_items(
        state,
        std::slice::from_ref(maintenance_id),
        km,
        recorded_at,
    ))
}

fn record_service_batch(
    state: &State,
    maintenance_ids: &[MaintenanceId],
    km: u32,
    recorded_at: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    // The whole batch is rejected on a regressive reading; unknown ids are not an error.
    validate_odometer_advance(state.current_km(), km)?;

    let mut seen: HashSet<&MaintenanceId> = HashSet::new();
    let matched: Vec<MaintenanceId> = maintenance_ids
        .iter()
        .filter(|id| state.vehicle.contains(id) && seen.insert(*id))
        .cloned()
        .collect();

    Ok(service_items(state, &matched, km, recorded_at))
}

/// Moves the odometer to `km` and marks every listed item as serviced there.
///
/// Every id in `serviced` must exist in `state`. One history entry is recorded
/// per id, in the given order, so the last id ends up newest.
fn service_items(
    state: &State,
    serviced: &[MaintenanceId],
    km: u32,
    recorded_at: OffsetDateTime,
) -> TransitionResult {
    let maintenance_types: Vec<MaintenanceType> = state
        .vehicle
        .maintenance_types
        .iter()
        .map(|m| {
            if serviced.contains(&m.id) {
                MaintenanceType {
                    last_change_km: km,
                    ..m.clone()
                }
            } else {
                m.clone()
            }
        })
        .collect();

    // Names are snapshotted from the state the command was issued against
    let recorded: Vec<HistoryEntry> = serviced
        .iter()
        .filter_map(|id| state.maintenance(id))
        .map(|m| HistoryEntry::record(m, km, recorded_at))
        .collect();

    let mut history: HistoryLog = state.history.clone();
    for entry in &recorded {
        history.record(entry.clone());
    }

    TransitionResult {
        new_state: State::new(VehicleRecord::new(km, maintenance_types), history),
        recorded,
    }
}

fn add_maintenance_type(
    state: &State,
    name: &str,
    icon: Icon,
    color: Color,
    interval: u32,
) -> Result<TransitionResult, CoreError> {
    let name: String = validate_name(name)?;
    validate_interval(interval)?;

    let maintenance: MaintenanceType = MaintenanceType::new(
        MaintenanceId::generate(),
        name,
        icon,
        color,
        interval,
        state.current_km(),
    );

    let mut maintenance_types: Vec<MaintenanceType> = state.vehicle.maintenance_types.clone();
    maintenance_types.push(maintenance);

    Ok(unchanged_history(
        state,
        VehicleRecord::new(state.current_km(), maintenance_types),
    ))
}

fn update_maintenance_type(
    state: &State,
    id: &MaintenanceId,
    mut update: MaintenanceUpdate,
) -> Result<TransitionResult, CoreError> {
    if !state.vehicle.contains(id) {
        return Err(CoreError::DomainViolation(DomainError::UnknownMaintenance(
            id.clone(),
        )));
    }
    if let Some(interval) = update.interval {
        validate_interval(interval)?;
    }
    if let Some(name) = update.name.take() {
        update.name = Some(validate_name(&name)?);
    }

    let maintenance_types: Vec<MaintenanceType> = state
        .vehicle
        .maintenance_types
        .iter()
        .map(|m| {
            if &m.id == id {
                m.with_update(&update)
            } else {
                m.clone()
            }
        })
        .collect();

    Ok(unchanged_history(
        state,
        VehicleRecord::new(state.current_km(), maintenance_types),
    ))
}

fn delete_maintenance_type(state: &State, id: &MaintenanceId) -> TransitionResult {
    let maintenance_types: Vec<MaintenanceType> = state
        .vehicle
        .maintenance_types
        .iter()
        .filter(|m| &m.id != id)
        .cloned()
        .collect();

    unchanged_history(
        state,
        VehicleRecord::new(state.current_km(), maintenance_types),
    )
}
