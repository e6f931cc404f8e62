//! Input validation for events.
//!
//! Checks raw event fields before an [`Event`] is built:
//! - Categorical fields (subject, room, professor, group) against the
//!   [`Catalog`] allow-lists
//! - Day names against the seven full English day names
//! - Time boundaries against strict 24-hour `HH:MM`
//!
//! Fields are checked in the order subject, room, professor, group, day,
//! time; the first failure is returned.

use crate::error::ValidationError;
use crate::models::{parse_time, Catalog, Day, Event, Schedule, TimeRange};
use crate::repository::RawEvent;

/// Checks that `value` is one of `allowed`.
pub fn validate_choice(
    field: &'static str,
    value: &str,
    allowed: &[String],
) -> Result<(), ValidationError> {
    if allowed.iter().any(|a| a == value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidField {
            field,
            value: value.to_string(),
            allowed: allowed.to_vec(),
        })
    }
}

/// Resolves a full day name.
pub fn validate_day(value: &str) -> Result<Day, ValidationError> {
    Day::from_name(value).ok_or_else(|| ValidationError::InvalidDay {
        value: value.to_string(),
        allowed: Day::ALL.iter().map(|d| d.name().to_string()).collect(),
    })
}

/// Checks a single `HH:MM` time, pattern `^([01]\d|2[0-3]):([0-5]\d)$`.
pub fn validate_time(field: &'static str, value: &str) -> Result<(), ValidationError> {
    parse_time(value)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidTime {
            field,
            value: value.to_string(),
        })
}

/// Checks an `HH:MM-HH:MM` range, each boundary strict.
pub fn validate_time_range(value: &str) -> Result<TimeRange, ValidationError> {
    let (start, end) = value
        .split_once('-')
        .ok_or_else(|| ValidationError::InvalidTime {
            field: "time",
            value: value.to_string(),
        })?;
    validate_time("start time", start)?;
    validate_time("end time", end)?;
    Ok(TimeRange::new(value))
}

/// Validates every field of a raw event and builds it.
pub fn validate_event(catalog: &Catalog, raw: &RawEvent) -> Result<Event, ValidationError> {
    validate_choice("subject", &raw.subject, catalog.subjects())?;
    validate_choice("room", &raw.room, catalog.rooms())?;
    validate_choice("professor", &raw.professor, catalog.professors())?;
    validate_choice("group", &raw.group, catalog.groups())?;

    let day = validate_day(&raw.day)?;
    let time_range = validate_time_range(&raw.time)?;

    Ok(Event::new_unchecked(
        raw.subject.as_str(),
        raw.room.as_str(),
        raw.professor.as_str(),
        Schedule::new(day, time_range),
        raw.group.as_str(),
    ))
}
