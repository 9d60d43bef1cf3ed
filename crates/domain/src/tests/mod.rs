// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod error;
mod theme;

use crate::{Color, Icon, MaintenanceId, MaintenanceType};

pub fn create_oil(last_change_km: u32) -> MaintenanceType {
    MaintenanceType::new(
        MaintenanceId::new("oil"),
        String::from("Aceite"),
        Icon::Droplet,
        Color::Blue,
        10_000,
        last_change_km,
    )
}

pub fn create_item(id: &str, interval: u32, last_change_km: u32) -> MaintenanceType {
    MaintenanceType::new(
        MaintenanceId::new(id),
        format!("Item {id}"),
        Icon::Wrench,
        Color::Green,
        interval,
        last_change_km,
    )
}
