//! Conflict detection between scheduled events.
//!
//! Two layers:
//! - **Schedule comparator** ([`schedules_collide`]): do two weekly slots
//!   overlap in time?
//! - **Conflict evaluator** ([`can_events_coexist`], [`find_conflicting_events`]):
//!   do two events contend for a professor, room or group, and which pairs
//!   in a sequence do?
//!
//! Evaluation is pure apart from the identical-event notice, which goes to
//! an injected [`CoexistenceObserver`].
//!
//! # Usage
//!
//! ```
//! use u_timetable::conflict::{find_conflicting_events, LogObserver};
//! use u_timetable::repository::EventRepository;
//!
//! let repo = EventRepository::default();
//! let events = vec![
//!     repo.create_event("Math", "101", "Antonio", ("Monday", "10:00-11:00"), "A").unwrap(),
//!     repo.create_event("Chemistry", "102", "Rocio", ("Monday", "10:00-11:00"), "A").unwrap(),
//! ];
//!
//! let conflicts = find_conflicting_events(&events, &LogObserver).unwrap();
//! assert_eq!(conflicts.len(), 1);
//! assert_eq!((conflicts[0].first, conflicts[0].second), (1, 2));
//! ```

mod comparator;
mod evaluator;
mod observer;
mod summary;

pub use comparator::schedules_collide;
pub use evaluator::{can_events_coexist, find_conflicting_events, Conflict};
pub use observer::{CoexistenceObserver, LogObserver, NoopObserver};
pub use summary::ConflictSummary;
