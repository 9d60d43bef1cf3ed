// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use kmtrack::{Command, State, apply};
use kmtrack_domain::MaintenanceId;
use time::macros::datetime;

/// Seed state with one oil change recorded at 15000 km.
pub fn create_serviced_state() -> State {
    apply(
        &State::seed(),
        Command::RecordService {
            maintenance_id: MaintenanceId::new("oil"),
            km: 15_000,
        },
        datetime!(2026-03-14 09:30:00 UTC),
    )
    .unwrap()
    .new_state
}
