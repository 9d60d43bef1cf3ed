// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::HistoryEntry;
use crate::tests::{create_test_date, create_test_maintenance};
use kmtrack_domain::{MaintenanceId, MaintenanceType};

#[test]
fn test_entry_snapshots_maintenance_identity() {
    let oil: MaintenanceType = create_test_maintenance("oil", "Aceite");

    let entry: HistoryEntry = HistoryEntry::record(&oil, 19_000, create_test_date());

    assert_eq!(entry.km, 19_000);
    assert_eq!(entry.maintenance_id, MaintenanceId::new("oil"));
    assert_eq!(entry.maintenance_name, "Aceite");
    assert_eq!(entry.date, create_test_date());
}

#[test]
fn test_entry_is_unaffected_by_later_rename() {
    let mut oil: MaintenanceType = create_test_maintenance("oil", "Aceite");
    let entry: HistoryEntry = HistoryEntry::record(&oil, 19_000, create_test_date());

    oil.name = String::from("Aceite sintético");

    assert_eq!(entry.maintenance_name, "Aceite");
}

#[test]
fn test_entries_get_distinct_ids() {
    let oil: MaintenanceType = create_test_maintenance("oil", "Aceite");

    let first: HistoryEntry = HistoryEntry::record(&oil, 19_000, create_test_date());
    let second: HistoryEntry = HistoryEntry::record(&oil, 19_000, create_test_date());

    assert_ne!(first.id, second.id);
}

#[test]
fn test_entry_serializes_in_camel_case_with_rfc3339_date() {
    let oil: MaintenanceType = create_test_maintenance("oil", "Aceite");
    let entry: HistoryEntry = HistoryEntry::record(&oil, 19_000, create_test_date());

    let value: serde_json::Value = serde_json::to_value(&entry).unwrap();

    assert_eq!(value["km"], 19_000);
    assert_eq!(value["maintenanceId"], "oil");
    assert_eq!(value["maintenanceName"], "Aceite");
    assert_eq!(value["date"], "2026-03-14T09:30:00Z");
    assert_eq!(value["id"], entry.id.as_str());
}

#[test]
fn test_entry_reads_stored_blob() {
    let blob: &str = r#"{
        "id": "17123456789010.123",
        "date": "2025-11-02T18:04:05.123Z",
        "km": 25000,
        "maintenanceId": "filter",
        "maintenanceName": "Filtro de Aceite"
    }"#;

    let entry: HistoryEntry = serde_json::from_str(blob).unwrap();

    assert_eq!(entry.id, "17123456789010.123");
    assert_eq!(entry.km, 25_000);
    assert_eq!(entry.maintenance_id, MaintenanceId::new("filter"));
    assert_eq!(entry.date.year(), 2025);
}
