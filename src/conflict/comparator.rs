//! Schedule comparator.

use crate::error::FormatError;
use crate::models::Schedule;

/// Whether two schedules overlap in time.
///
/// Schedules on different days never collide; that case returns before
/// either range is parsed. On the same day the ranges collide iff
/// `max(start) < min(end)`, so back-to-back slots are compatible.
///
/// # Errors
/// [`FormatError`] if a range on a shared day is not `HH:MM-HH:MM`.
///
/// # Example
///
/// ```
/// use u_timetable::conflict::schedules_collide;
/// use u_timetable::models::{Day, Schedule};
///
/// let a = Schedule::new(Day::MONDAY, "09:00-10:00");
/// let b = Schedule::new(Day::MONDAY, "10:00-11:00");
/// assert!(!schedules_collide(&a, &b).unwrap());
/// ```
pub fn schedules_collide(a: &Schedule, b: &Schedule) -> Result<bool, FormatError> {
    if a.day != b.day {
        return Ok(false);
    }
    a.time_range.overlaps(&b.time_range)
}
