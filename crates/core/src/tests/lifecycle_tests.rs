// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Multi-step scenarios starting from the first-run state.

use crate::tests::helpers::create_test_date;
use crate::{Command, State, apply, due_service_command};
use kmtrack_domain::{DueStatus, MaintenanceId, compute_progress, status_summary};

#[test]
fn test_seed_drive_and_service_cycle() {
    let mut state: State = State::seed();

    // Oil reaches 80% at 18000
    state = apply(&state, Command::UpdateOdometer { km: 18_000 }, create_test_date())
        .unwrap()
        .new_state;
    let oil = state.maintenance(&MaintenanceId::new("oil")).unwrap();
    assert_eq!(
        compute_progress(state.current_km(), oil).unwrap().status,
        DueStatus::Warning
    );

    state = apply(&state, Command::UpdateOdometer { km: 20_000 }, create_test_date())
        .unwrap()
        .new_state;
    let summary = status_summary(state.current_km(), &state.vehicle.maintenance_types);
    assert_eq!(summary.due, 1);
    assert_eq!(summary.ok, 1);

    let command: Command = due_service_command(&state, state.current_km());
    state = apply(&state, command, create_test_date()).unwrap().new_state;

    let oil = state.maintenance(&MaintenanceId::new("oil")).unwrap();
    assert_eq!(oil.last_change_km, 20_000);
    assert_eq!(
        compute_progress(state.current_km(), oil).unwrap().status,
        DueStatus::Ok
    );
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history.latest().unwrap().maintenance_name, "Aceite");
}

#[test]
fn test_failed_command_leaves_sequence_unchanged() {
    let state: State = State::seed();
    let command: Command = Command::AddMaintenanceType {
        name: String::new(),
        icon: kmtrack_domain::Icon::Wrench,
        color: kmtrack_domain::Color::Blue,
        interval: 10_000,
    };

    assert!(apply(&state, command, create_test_date()).is_err());
    assert_eq!(state, State::seed());
}

#[test]
fn test_delete_after_service_keeps_entry_name() {
    let mut state: State = State::seed();

    state = apply(
        &state,
        Command::RecordService {
            maintenance_id: MaintenanceId::new("oil"),
            km: 15_000,
        },
        create_test_date(),
    )
    .unwrap()
    .new_state;
    state = apply(
        &state,
        Command::DeleteMaintenanceType {
            id: MaintenanceId::new("oil"),
        },
        create_test_date(),
    )
    .unwrap()
    .new_state;

    assert_eq!(state.vehicle.maintenance_types.len(), 1);
    assert_eq!(state.history.latest().unwrap().maintenance_name, "Aceite");
}
