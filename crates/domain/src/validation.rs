// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates that an odometer reading does not move backwards.
///
/// Equal readings are accepted.
///
/// # Arguments
///
/// * `current` - The reading currently on record
/// * `attempted` - The proposed new reading
///
/// # Errors
///
/// Returns `DomainError::RegressiveOdometer` if `attempted < current`.
pub const fn validate_odometer_advance(current: u32, attempted: u32) -> Result<(), DomainError> {
    if attempted < current {
        return Err(DomainError::RegressiveOdometer { current, attempted });
    }
    Ok(())
}

/// Validates that a service interval is positive.
///
/// # Errors
///
/// Returns `DomainError::InvalidInterval` if `interval` is zero.
pub fn validate_interval(interval: u32) -> Result<(), DomainError> {
    if interval == 0 {
        return Err(DomainError::InvalidInterval(String::from(
            "Interval must be greater than zero",
        )));
    }
    Ok(())
}

/// Validates a maintenance type name and returns it trimmed.
///
/// # Errors
///
/// Returns `DomainError::EmptyName` if the name is blank.
pub fn validate_name(name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Parses an odometer reading typed by the user.
///
/// # Errors
///
/// Returns `DomainError::InvalidKilometers` if the input is not a whole
/// number, is negative, or does not fit the odometer range.
pub fn parse_kilometers(input: &str) -> Result<u32, DomainError> {
    let value: i64 = input.trim().parse::<i64>().map_err(|_| {
        DomainError::InvalidKilometers(format!("'{}' is not a whole number", input.trim()))
    })?;
    if value < 0 {
        return Err(DomainError::InvalidKilometers(format!(
            "{value} is negative"
        )));
    }
    u32::try_from(value)
        .map_err(|_| DomainError::InvalidKilometers(format!("{value} is out of range")))
}

/// Parses a service interval typed by the user.
///
/// # Errors
///
/// Returns `DomainError::InvalidInterval` if the input is not a whole
/// number, is zero or negative, or does not fit the interval range.
pub fn parse_interval(input: &str) -> Result<u32, DomainError> {
    let value: i64 = input.trim().parse::<i64>().map_err(|_| {
        DomainError::InvalidInterval(format!("'{}' is not a whole number", input.trim()))
    })?;
    if value <= 0 {
        return Err(DomainError::InvalidInterval(format!(
            "{value} must be greater than zero"
        )));
    }
    u32::try_from(value)
        .map_err(|_| DomainError::InvalidInterval(format!("{value} is out of range")))
}
