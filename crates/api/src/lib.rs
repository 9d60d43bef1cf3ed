// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the kmtrack vehicle maintenance tracker.
//!
//! Presentation layers talk to [`Tracker`] with request DTOs carrying raw
//! form text and receive response DTOs or an [`ApiError`]. Domain and core
//! errors never cross this boundary untranslated.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod request_response;
mod tracker;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use request_response::{
    AddKilometersRequest, AddMaintenanceTypeRequest, DashboardResponse, HistoryEntryInfo,
    HistoryResponse, MaintenanceStatusInfo, RecordDueServicesRequest, RecordServiceBatchRequest,
    RecordServiceRequest, SetThemeRequest, ThemeResponse, UpdateMaintenanceTypeRequest,
    UpdateOdometerRequest, WriteResponse,
};
pub use tracker::Tracker;
