// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kmtrack_domain::{Color, Icon, MaintenanceId, MaintenanceType, VehicleRecord};
use kmtrack_persistence::MemoryStore;

use super::helpers::create_test_tracker;
use crate::{
    AddMaintenanceTypeRequest, ApiError, RecordServiceRequest, Tracker,
    UpdateMaintenanceTypeRequest, WriteResponse,
};

fn add_request(name: &str, icon: &str, color: &str, interval: &str) -> AddMaintenanceTypeRequest {
    AddMaintenanceTypeRequest {
        name: String::from(name),
        icon: String::from(icon),
        color: String::from(color),
        interval: String::from(interval),
    }
}

#[test]
fn test_add_maintenance_type() {
    let mut tracker: Tracker<MemoryStore> = create_test_tracker();

    let response: WriteResponse = tracker
        .add_maintenance_type(&add_request(" Frenos ", "disc", "red", "40000"))
        .unwrap();

    assert_eq!(response.message, "Maintenance type 'Frenos' added");
    let vehicle: VehicleRecord = tracker.vehicle();
    let added: &MaintenanceType = vehicle.maintenance_types.last().unwrap();
    assert_eq!(added.name, "Frenos");
    assert_eq!(added.icon, Icon::Disc);
    assert_eq!(added.color, Color::Red);
    assert_eq!(added.interval, 40_000);
    assert_eq!(added.last_change_km, 15_000);
}

#[test]
fn test_add_maintenance_type_empty_name_leaves_types_unchanged() {
    let mut tracker: Tracker<MemoryStore> = create_test_tracker();

    let result: Result<WriteResponse, ApiError> =
        tracker.add_maintenance_type(&add_request("", "wrench", "blue", "5000"));

    assert!(matches!(
        result.unwrap_err(),
        ApiError::InvalidInput { field, .. } if field == "name"
    ));
    assert_eq!(tracker.vehicle(), VehicleRecord::seed());
}

#[test]
fn test_add_maintenance_type_rejects_bad_fields() {
    let mut tracker: Tracker<MemoryStore> = create_test_tracker();
    let cases: Vec<(AddMaintenanceTypeRequest, &str)> = vec![
        (add_request("A", "rocket", "blue", "5000"), "icon"),
        (add_request("A", "wrench", "teal", "5000"), "color"),
        (add_request("A", "wrench", "blue", "0"), "interval"),
        (add_request("A", "wrench", "blue", "-5"), "interval"),
        (add_request("A", "wrench", "blue", "soon"), "interval"),
    ];

    for (request, expected) in cases {
        match tracker.add_maintenance_type(&request).unwrap_err() {
            ApiError::InvalidInput { field, .. } => assert_eq!(field, expected),
            other => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(tracker.vehicle().maintenance_types.len(), 2);
}

#[test]
fn test_update_maintenance_type_partial() {
    let mut tracker: Tracker<MemoryStore> = create_test_tracker();

    tracker
        .update_maintenance_type(
            "oil",
            &UpdateMaintenanceTypeRequest {
                color: Some(String::from("yellow")),
                interval: Some(String::from("8000")),
                ..UpdateMaintenanceTypeRequest::default()
            },
        )
        .unwrap();

    let oil = tracker
        .state()
        .maintenance(&MaintenanceId::new("oil"))
        .unwrap();
    assert_eq!(oil.name, "Aceite");
    assert_eq!(oil.icon, Icon::Droplet);
    assert_eq!(oil.color, Color::Yellow);
    assert_eq!(oil.interval, 8_000);
    assert_eq!(oil.last_change_km, 10_000);
}

#[test]
fn test_update_unknown_maintenance_type_is_not_found() {
    let mut tracker: Tracker<MemoryStore> = create_test_tracker();

    let result: Result<WriteResponse, ApiError> =
        tracker.update_maintenance_type("brakes", &UpdateMaintenanceTypeRequest::default());

    assert!(matches!(
        result.unwrap_err(),
        ApiError::ResourceNotFound { .. }
    ));
}

#[test]
fn test_delete_keeps_history_name() {
    let mut tracker: Tracker<MemoryStore> = create_test_tracker();
    tracker
        .record_service(&RecordServiceRequest {
            maintenance_id: String::from("oil"),
            km: String::from("19000"),
        })
        .unwrap();

    let response: WriteResponse = tracker.delete_maintenance_type("oil").unwrap();

    assert_eq!(response.message, "Maintenance type deleted");
    assert!(tracker.state().maintenance(&MaintenanceId::new("oil")).is_none());
    assert_eq!(
        tracker.history().latest().unwrap().maintenance_name,
        "Aceite"
    );
}

#[test]
fn test_delete_unknown_maintenance_type_is_noop() {
    let mut tracker: Tracker<MemoryStore> = create_test_tracker();

    let response: WriteResponse = tracker.delete_maintenance_type("brakes").unwrap();

    assert!(response.success);
    assert_eq!(tracker.vehicle(), VehicleRecord::seed());
}
