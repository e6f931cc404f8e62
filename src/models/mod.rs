//! Timetable domain models.
//!
//! Provides the data types for scheduled academic events and the
//! allow-list configuration that constrains them.
//!
//! # Domain
//!
//! | Type | Meaning |
//! |------|---------|
//! | Event | One class meeting: subject, room, professor, group, schedule |
//! | Schedule | Day of the week plus a wall-clock time range |
//! | Catalog | Allowed subjects, rooms, professors and groups |

mod catalog;
mod event;
mod schedule;

pub use catalog::{Catalog, GROUPS, PROFESSORS, ROOMS, SUBJECTS};
pub use event::Event;
pub use schedule::{parse_time, Day, Schedule, TimeRange};
