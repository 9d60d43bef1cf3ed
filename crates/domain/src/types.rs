// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies a maintenance type for its whole lifetime.
///
/// Seeded types use short readable identifiers (`oil`, `filter`); types
/// created at runtime receive a random UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaintenanceId {
    value: String,
}

impl MaintenanceId {
    /// Wraps an existing identifier.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Generates a fresh identifier that has never been issued before.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            value: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for MaintenanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Icon tag attached to a maintenance type.
///
/// Purely a presentation hint; nothing in the domain branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Droplet,
    Filter,
    #[default]
    Wrench,
    Zap,
    Fan,
    Disc,
    Wind,
    Gauge,
    Cog,
    Alert,
}

impl Icon {
    /// Every supported icon, in picker order.
    pub const ALL: [Self; 10] = [
        Self::Droplet,
        Self::Filter,
        Self::Wrench,
        Self::Zap,
        Self::Fan,
        Self::Disc,
        Self::Wind,
        Self::Gauge,
        Self::Cog,
        Self::Alert,
    ];

    /// Returns the tag used on the wire and in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Droplet => "droplet",
            Self::Filter => "filter",
            Self::Wrench => "wrench",
            Self::Zap => "zap",
            Self::Fan => "fan",
            Self::Disc => "disc",
            Self::Wind => "wind",
            Self::Gauge => "gauge",
            Self::Cog => "cog",
            Self::Alert => "alert",
        }
    }
}

impl FromStr for Icon {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| DomainError::UnknownIcon(s.to_string()))
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accent color tag attached to a maintenance type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Purple,
    Green,
    Red,
    Orange,
    Pink,
    Indigo,
    Yellow,
}

impl Color {
    /// Every supported color, in picker order.
    pub const ALL: [Self; 8] = [
        Self::Blue,
        Self::Purple,
        Self::Green,
        Self::Red,
        Self::Orange,
        Self::Pink,
        Self::Indigo,
        Self::Yellow,
    ];

    /// Returns the tag used on the wire and in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Indigo => "indigo",
            Self::Yellow => "yellow",
        }
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| DomainError::UnknownColor(s.to_string()))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recurring service item tracked against the odometer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceType {
    /// Stable identifier.
    pub id: MaintenanceId,
    /// Display label.
    pub name: String,
    /// Presentation icon.
    pub icon: Icon,
    /// Presentation color.
    pub color: Color,
    /// Distance between required services. Always greater than zero.
    pub interval: u32,
    /// Odometer reading at the last recorded service.
    pub last_change_km: u32,
}

impl MaintenanceType {
    /// Creates a new `MaintenanceType`.
    ///
    /// No validation happens here; callers run the name and interval
    /// through `validation` first.
    #[must_use]
    pub const fn new(
        id: MaintenanceId,
        name: String,
        icon: Icon,
        color: Color,
        interval: u32,
        last_change_km: u32,
    ) -> Self {
        Self {
            id,
            name,
            icon,
            color,
            interval,
            last_change_km,
        }
    }

    /// Returns a copy with the supplied fields of `update` merged in.
    ///
    /// The identifier and `last_change_km` are never touched.
    #[must_use]
    pub fn with_update(&self, update: &MaintenanceUpdate) -> Self {
        Self {
            id: self.id.clone(),
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            icon: update.icon.unwrap_or(self.icon),
            color: update.color.unwrap_or(self.color),
            interval: update.interval.unwrap_or(self.interval),
            last_change_km: self.last_change_km,
        }
    }
}

/// A partial edit of a maintenance type. `None` fields keep their value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaintenanceUpdate {
    /// New display label.
    pub name: Option<String>,
    /// New icon.
    pub icon: Option<Icon>,
    /// New color.
    pub color: Option<Color>,
    /// New service interval.
    pub interval: Option<u32>,
}

impl MaintenanceUpdate {
    /// Returns true if no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.icon.is_none()
            && self.color.is_none()
            && self.interval.is_none()
    }
}

/// The single vehicle being tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// Most recently reported odometer reading.
    pub current_km: u32,
    /// Maintenance types in display order.
    pub maintenance_types: Vec<MaintenanceType>,
}

impl VehicleRecord {
    /// Creates a new `VehicleRecord`.
    #[must_use]
    pub const fn new(current_km: u32, maintenance_types: Vec<MaintenanceType>) -> Self {
        Self {
            current_km,
            maintenance_types,
        }
    }

    /// The record used on first run, before anything has been saved.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(
            15_000,
            vec![
                MaintenanceType::new(
                    MaintenanceId::new("oil"),
                    String::from("Aceite"),
                    Icon::Droplet,
                    Color::Blue,
                    10_000,
                    10_000,
                ),
                MaintenanceType::new(
                    MaintenanceId::new("filter"),
                    String::from("Filtro de Aceite"),
                    Icon::Filter,
                    Color::Purple,
                    20_000,
                    10_000,
                ),
            ],
        )
    }

    /// Looks up a maintenance type by identifier.
    #[must_use]
    pub fn find(&self, id: &MaintenanceId) -> Option<&MaintenanceType> {
        self.maintenance_types.iter().find(|m| &m.id == id)
    }

    /// Returns true if a maintenance type with this identifier exists.
    #[must_use]
    pub fn contains(&self, id: &MaintenanceId) -> bool {
        self.find(id).is_some()
    }
}

impl Default for VehicleRecord {
    fn default() -> Self {
        Self::seed()
    }
}
