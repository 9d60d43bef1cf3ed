// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_date, create_test_maintenance};
use crate::{HISTORY_LIMIT, HistoryEntry, HistoryLog};
use kmtrack_domain::{MaintenanceId, MaintenanceType};

fn create_entry(km: u32) -> HistoryEntry {
    let oil: MaintenanceType = create_test_maintenance("oil", "Aceite");
    HistoryEntry::record(&oil, km, create_test_date())
}

#[test]
fn test_new_log_is_empty() {
    let log: HistoryLog = HistoryLog::new();

    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert!(log.latest().is_none());
}

#[test]
fn test_record_puts_newest_first() {
    let mut log: HistoryLog = HistoryLog::new();

    log.record(create_entry(1_000));
    log.record(create_entry(2_000));
    log.record(create_entry(3_000));

    let kms: Vec<u32> = log.entries().iter().map(|e| e.km).collect();
    assert_eq!(kms, vec![3_000, 2_000, 1_000]);
    assert_eq!(log.latest().unwrap().km, 3_000);
}

#[test]
fn test_log_never_exceeds_limit() {
    let mut log: HistoryLog = HistoryLog::new();

    for i in 0..50_u32 {
        log.record(create_entry(i * 100));
        assert!(log.len() <= HISTORY_LIMIT);
    }

    assert_eq!(log.len(), HISTORY_LIMIT);
    // The 20 newest survive: 4900 down to 3000
    assert_eq!(log.entries()[0].km, 4_900);
    assert_eq!(log.entries()[HISTORY_LIMIT - 1].km, 3_000);
}

#[test]
fn test_for_maintenance_filters_by_id() {
    let mut log: HistoryLog = HistoryLog::new();
    let oil: MaintenanceType = create_test_maintenance("oil", "Aceite");
    let filter: MaintenanceType = create_test_maintenance("filter", "Filtro de Aceite");

    log.record(HistoryEntry::record(&oil, 10_000, create_test_date()));
    log.record(HistoryEntry::record(&filter, 12_000, create_test_date()));
    log.record(HistoryEntry::record(&oil, 20_000, create_test_date()));

    let oil_id: MaintenanceId = MaintenanceId::new("oil");
    let oil_kms: Vec<u32> = log.for_maintenance(&oil_id).map(|e| e.km).collect();
    assert_eq!(oil_kms, vec![20_000, 10_000]);
}

#[test]
fn test_log_serializes_as_bare_array() {
    let mut log: HistoryLog = HistoryLog::new();
    log.record(create_entry(1_000));

    let value: serde_json::Value = serde_json::to_value(&log).unwrap();

    assert!(value.is_array());
    assert_eq!(value.as_array().unwrap().len(), 1);
}

#[test]
fn test_oversized_stored_log_is_truncated_on_load() {
    let entries: Vec<HistoryEntry> = (0..25_u32).map(|i| create_entry(30_000 - i)).collect();
    let blob: String = serde_json::to_string(&entries).unwrap();

    let log: HistoryLog = serde_json::from_str(&blob).unwrap();

    assert_eq!(log.len(), HISTORY_LIMIT);
    assert_eq!(log.entries()[0].km, 30_000);
}

#[test]
fn test_log_round_trips_through_json() {
    let mut log: HistoryLog = HistoryLog::new();
    log.record(create_entry(1_000));
    log.record(create_entry(2_000));

    let blob: String = serde_json::to_string(&log).unwrap();
    let restored: HistoryLog = serde_json::from_str(&blob).unwrap();

    assert_eq!(restored, log);
}
