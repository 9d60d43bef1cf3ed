// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod entry;
mod history_log;

use kmtrack_domain::{Color, Icon, MaintenanceId, MaintenanceType};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_maintenance(id: &str, name: &str) -> MaintenanceType {
    MaintenanceType::new(
        MaintenanceId::new(id),
        String::from(name),
        Icon::Droplet,
        Color::Blue,
        10_000,
        10_000,
    )
}

pub fn create_test_date() -> OffsetDateTime {
    datetime!(2026-03-14 09:30:00 UTC)
}
