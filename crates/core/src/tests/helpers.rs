// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::State;
use kmtrack_domain::{Color, Icon, MaintenanceId, MaintenanceType, VehicleRecord};
use kmtrack_history::HistoryLog;
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_date() -> OffsetDateTime {
    datetime!(2026-03-14 09:30:00 UTC)
}

pub fn create_test_maintenance(id: &str, interval: u32, last_change_km: u32) -> MaintenanceType {
    MaintenanceType::new(
        MaintenanceId::new(id),
        format!("Item {id}"),
        Icon::Wrench,
        Color::Green,
        interval,
        last_change_km,
    )
}

/// A vehicle at 5000 km with oil (due) and tires (ok).
pub fn create_test_state() -> State {
    State::new(
        VehicleRecord::new(
            5_000,
            vec![
                create_test_maintenance("oil", 5_000, 0),
                create_test_maintenance("tires", 40_000, 0),
            ],
        ),
        HistoryLog::new(),
    )
}
