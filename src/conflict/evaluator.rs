//! Pairwise coexistence rules and the conflict scan.
//!
//! # Rules
//!
//! Evaluated in order; the first rule that decides wins.
//!
//! 1. Identical events coexist (a notice is raised).
//! 2. Overlapping schedules conflict if professor, room or group is shared.
//! 3. Same-subject events coexist when they are separate sections
//!    (different professor and room), the same professor at non-overlapping
//!    times, or a reused room at non-overlapping times. Otherwise they
//!    conflict.
//! 4. Everything else coexists.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{schedules_collide, CoexistenceObserver};
use crate::error::FormatError;
use crate::models::Event;

/// A conflicting pair, by 1-based position in the scanned sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Conflict {
    /// Position of the earlier event of the pair.
    pub first: usize,
    /// Position of the later event of the pair.
    pub second: usize,
}

impl Conflict {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event {} conflicts with event {}", self.first, self.second)
    }
}

/// Whether two events can both appear on the calendar.
///
/// Symmetric in its arguments. An event always coexists with itself or an
/// exact duplicate; in that case `observer` is told about it.
///
/// # Errors
/// [`FormatError`] if the schedules share a day and a time range is
/// malformed. Events from the repository never trigger it.
///
/// # Example
///
/// ```
/// use u_timetable::conflict::{can_events_coexist, NoopObserver};
/// use u_timetable::repository::EventRepository;
///
/// let repo = EventRepository::default();
/// let math = repo.create_event("Math", "101", "Antonio", ("Monday", "10:00-11:00"), "A").unwrap();
/// let physics = repo.create_event("Physics", "101", "Maria", ("Monday", "10:00-11:00"), "B").unwrap();
///
/// // Same room at the same time.
/// assert!(!can_events_coexist(&math, &physics, &NoopObserver).unwrap());
/// ```
pub fn can_events_coexist(
    a: &Event,
    b: &Event,
    observer: &dyn CoexistenceObserver,
) -> Result<bool, FormatError> {
    if a.is_identical(b) {
        observer.on_identical(a, b);
        return Ok(true);
    }

    let same_professor = a.professor() == b.professor();
    let same_room = a.room() == b.room();
    let collide = schedules_collide(a.schedule(), b.schedule())?;

    // Any shared resource during overlapping time.
    if collide {
        if same_professor {
            return Ok(false);
        }
        if same_room {
            return Ok(false);
        }
        if a.group() == b.group() {
            return Ok(false);
        }
    }

    if a.subject() == b.subject() {
        if !same_professor && !same_room {
            return Ok(true);
        }
        if same_professor && !collide {
            return Ok(true);
        }
        if !same_professor && same_room && !collide {
            return Ok(true);
        }
        // Unreachable after the collision checks above; kept so the
        // same-subject rules stay complete on their own.
        return Ok(false);
    }

    Ok(true)
}

/// Lists every pair of events that cannot coexist.
///
/// Pairs are visited in combinatorial order, `(1, 2), (1, 3), .., (2, 3), ..`,
/// and each unordered pair exactly once.
///
/// # Known issue
/// Positions are found by looking each event up by value, so when the
/// sequence holds duplicate events every conflict involving a duplicate
/// reports the position of its first occurrence rather than its own.
/// Downstream consumers depend on this numbering.
///
/// # Errors
/// Propagates the first [`FormatError`] from [`can_events_coexist`].
pub fn find_conflicting_events(
    events: &[Event],
    observer: &dyn CoexistenceObserver,
) -> Result<Vec<Conflict>, FormatError> {
    let mut conflicts = Vec::new();

    for (i, a) in events.iter().enumerate() {
        for (j, b) in events.iter().enumerate().skip(i + 1) {
            if !can_events_coexist(a, b, observer)? {
                let conflict = Conflict::new(
                    first_position(events, a, i),
                    first_position(events, b, j),
                );
                log::debug!("{conflict}");
                conflicts.push(conflict);
            }
        }
    }

    log::debug!(
        "scanned {} events, {} conflicting pairs",
        events.len(),
        conflicts.len()
    );
    Ok(conflicts)
}

/// 1-based position of the first event equal to `event`.
fn first_position(events: &[Event], event: &Event, index: usize) -> usize {
    events.iter().position(|e| e == event).unwrap_or(index) + 1
}
