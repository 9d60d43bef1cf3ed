// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, MaintenanceId};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::RegressiveOdometer {
        current: 5_000,
        attempted: 4_000,
    };
    assert_eq!(
        format!("{err}"),
        "Odometer cannot go backwards: 4000 km is less than the current 5000 km"
    );

    let err: DomainError = DomainError::UnknownMaintenance(MaintenanceId::new("oil"));
    assert_eq!(format!("{err}"), "Maintenance type 'oil' not found");

    let err: DomainError = DomainError::InvalidInterval(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid interval: test");

    let err: DomainError = DomainError::EmptyName;
    assert_eq!(format!("{err}"), "Name cannot be empty");

    let err: DomainError = DomainError::InvalidKilometers(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid kilometers: test");

    let err: DomainError = DomainError::UnknownIcon(String::from("rocket"));
    assert_eq!(format!("{err}"), "Unknown icon: 'rocket'");

    let err: DomainError = DomainError::UnknownColor(String::from("teal"));
    assert_eq!(format!("{err}"), "Unknown color: 'teal'");
}
