// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kmtrack::CoreError;
use kmtrack_domain::{DomainError, MaintenanceId};
use kmtrack_persistence::PersistenceError;

use crate::{ApiError, translate_core_error, translate_domain_error};

#[test]
fn test_regressive_odometer_translation() {
    let err: ApiError = translate_domain_error(DomainError::RegressiveOdometer {
        current: 5_000,
        attempted: 4_000,
    });

    assert_eq!(
        err,
        ApiError::DomainRuleViolation {
            rule: String::from("monotonic_odometer"),
            message: String::from(
                "Odometer cannot go backwards: 4000 km is less than the current 5000 km"
            ),
        }
    );
}

#[test]
fn test_unknown_maintenance_translation() {
    let err: ApiError = translate_domain_error(DomainError::UnknownMaintenance(
        MaintenanceId::new("brakes"),
    ));

    assert_eq!(
        err.to_string(),
        "Maintenance type not found: Maintenance type 'brakes' not found"
    );
}

#[test]
fn test_input_errors_name_their_field() {
    let cases: Vec<(DomainError, &str)> = vec![
        (DomainError::InvalidInterval(String::from("x")), "interval"),
        (DomainError::EmptyName, "name"),
        (DomainError::InvalidKilometers(String::from("x")), "km"),
        (DomainError::UnknownIcon(String::from("x")), "icon"),
        (DomainError::UnknownColor(String::from("x")), "color"),
    ];

    for (domain_err, expected) in cases {
        match translate_domain_error(domain_err) {
            ApiError::InvalidInput { field, .. } => assert_eq!(field, expected),
            other => panic!("unexpected translation: {other}"),
        }
    }
}

#[test]
fn test_core_error_translation() {
    let err: ApiError = translate_core_error(CoreError::DomainViolation(DomainError::EmptyName));

    assert_eq!(
        err.to_string(),
        "Invalid input for field 'name': Name cannot be empty"
    );
}

#[test]
fn test_persistence_error_is_internal() {
    let err: ApiError = ApiError::from(PersistenceError::StorageError(String::from("denied")));

    assert_eq!(
        err.to_string(),
        "Internal error: Persistence error: Storage error: denied"
    );
}
