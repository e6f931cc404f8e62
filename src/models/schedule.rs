//! Weekly time-slot model.
//!
//! A [`Schedule`] places an event on one day of the week during a
//! wall-clock [`TimeRange`]. Ranges keep the raw `"HH:MM-HH:MM"` text they
//! were built from; parsing happens when two schedules are compared.
//!
//! # Time Model
//! Minute granularity, 00:00 to 23:59, no timezone. A range is the
//! half-open interval [start, end): it includes start and excludes end.
//! `start < end` is assumed, not enforced.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Day of the week.
///
/// Only the full English names (`"Monday"` .. `"Sunday"`) are accepted
/// when parsing, and they are what serialization produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Day(Weekday);

impl Day {
    /// All seven days, Monday first.
    pub const ALL: [Day; 7] = [
        Day(Weekday::Mon),
        Day(Weekday::Tue),
        Day(Weekday::Wed),
        Day(Weekday::Thu),
        Day(Weekday::Fri),
        Day(Weekday::Sat),
        Day(Weekday::Sun),
    ];

    pub const MONDAY: Day = Day(Weekday::Mon);
    pub const TUESDAY: Day = Day(Weekday::Tue);
    pub const WEDNESDAY: Day = Day(Weekday::Wed);
    pub const THURSDAY: Day = Day(Weekday::Thu);
    pub const FRIDAY: Day = Day(Weekday::Fri);
    pub const SATURDAY: Day = Day(Weekday::Sat);
    pub const SUNDAY: Day = Day(Weekday::Sun);

    /// Full English name.
    pub fn name(&self) -> &'static str {
        match self.0 {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// Looks a day up by its exact full name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// The underlying chrono weekday.
    pub fn weekday(&self) -> Weekday {
        self.0
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Self(weekday)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown day '{s}'"))
    }
}

impl TryFrom<String> for Day {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.name().to_string()
    }
}

/// A wall-clock range in `"HH:MM-HH:MM"` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeRange(String);

impl TimeRange {
    /// Wraps range text without checking it.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Raw range text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the range into `(start, end)`.
    ///
    /// Both boundaries must be strict `HH:MM`, joined by a single `-`.
    pub fn parse(&self) -> Result<(NaiveTime, NaiveTime), FormatError> {
        let (start, end) = self
            .0
            .split_once('-')
            .ok_or_else(|| FormatError::new(&self.0, "expected HH:MM-HH:MM"))?;
        Ok((parse_time(start)?, parse_time(end)?))
    }

    /// Whether two ranges intersect: `max(start) < min(end)`.
    ///
    /// Touching ranges (one ends exactly when the other starts) do not
    /// overlap.
    pub fn overlaps(&self, other: &Self) -> Result<bool, FormatError> {
        let (start_a, end_a) = self.parse()?;
        let (start_b, end_b) = other.parse()?;
        Ok(start_a.max(start_b) < end_a.min(end_b))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimeRange {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// When an event takes place: a day and a time range on that day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    /// Day of the week.
    pub day: Day,
    /// Time range on that day.
    pub time_range: TimeRange,
}

impl Schedule {
    /// Creates a schedule.
    pub fn new(day: Day, time_range: impl Into<TimeRange>) -> Self {
        Self {
            day,
            time_range: time_range.into(),
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time_range)
    }
}

/// Parses a strict 24-hour `HH:MM` time.
///
/// Exactly two digits, a colon, two digits; hour 00-23, minute 00-59.
pub fn parse_time(text: &str) -> Result<NaiveTime, FormatError> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !shaped {
        return Err(FormatError::new(text, "expected HH:MM"));
    }
    NaiveTime::parse_from_str(text, "%H:%M")
        .map_err(|e| FormatError::new(text, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("23:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
        assert!(parse_time("00:00").is_ok());
    }

    #[test]
    fn test_parse_time_rejects_loose_forms() {
        for bad in ["9:30", "09:3", "24:00", "12:60", "0930", "09-30", " 09:30", "ab:cd", ""] {
            assert!(parse_time(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_time_range_parse() {
        let range = TimeRange::new("10:00-11:30");
        let (start, end) = range.parse().unwrap();
        assert_eq!(start, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(11, 30, 0).unwrap());
    }

    #[test]
    fn test_time_range_parse_errors() {
        let err = TimeRange::new("10:00").parse().unwrap_err();
        assert_eq!(err.value, "10:00");

        let err = TimeRange::new("10:00-25:00").parse().unwrap_err();
        assert_eq!(err.value, "25:00");
    }

    #[test]
    fn test_time_range_overlap() {
        let a = TimeRange::new("09:00-11:00");
        let b = TimeRange::new("10:00-10:30");
        assert!(a.overlaps(&b).unwrap());
        assert!(b.overlaps(&a).unwrap());

        let c = TimeRange::new("11:00-12:00"); // touching
        assert!(!a.overlaps(&c).unwrap());
        assert!(!c.overlaps(&a).unwrap());
    }

    #[test]
    fn test_day_names() {
        assert_eq!(Day::from_name("Monday"), Some(Day::MONDAY));
        assert_eq!(Day::from_name("Sunday"), Some(Day::SUNDAY));
        assert_eq!(Day::from_name("monday"), None);
        assert_eq!(Day::from_name("Mon"), None);
        assert_eq!(Day::WEDNESDAY.to_string(), "Wednesday");
        assert_eq!(Day::from(Weekday::Fri), Day::FRIDAY);
    }

    #[test]
    fn test_schedule_serde() {
        let schedule = Schedule::new(Day::TUESDAY, "08:00-09:00");
        let json = serde_json::to_string(&schedule).unwrap();
        assert_eq!(json, r#"{"day":"Tuesday","time_range":"08:00-09:00"}"#);

        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);

        assert!(serde_json::from_str::<Schedule>(r#"{"day":"Tue","time_range":"08:00-09:00"}"#).is_err());
    }
}
