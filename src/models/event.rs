//! Event model.
//!
//! An event is one scheduled class meeting: a subject taught by a
//! professor to a group, in a room, at a weekly time slot.
//!
//! Events are immutable. Their fields are private and the only public way
//! to obtain one is [`EventRepository`](crate::repository::EventRepository),
//! which validates every field against the allow-lists first.

use serde::Serialize;

use super::Schedule;

/// A validated, immutable scheduled event.
///
/// Serializes for reporting. To read events from JSON, go through
/// [`EventRepository::load_json`](crate::repository::EventRepository::load_json).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    subject: String,
    room: String,
    professor: String,
    schedule: Schedule,
    group: String,
}

impl Event {
    /// Assembles an event from already-validated parts.
    pub(crate) fn new_unchecked(
        subject: impl Into<String>,
        room: impl Into<String>,
        professor: impl Into<String>,
        schedule: Schedule,
        group: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            room: room.into(),
            professor: professor.into(),
            schedule,
            group: group.into(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn professor(&self) -> &str {
        &self.professor
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Whether all five fields match.
    pub fn is_identical(&self, other: &Self) -> bool {
        self.subject == other.subject
            && self.room == other.room
            && self.professor == other.professor
            && self.schedule == other.schedule
            && self.group == other.group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    fn math() -> Event {
        Event::new_unchecked(
            "Math",
            "101",
            "Antonio",
            Schedule::new(Day::MONDAY, "10:00-11:00"),
            "A",
        )
    }

    #[test]
    fn test_accessors() {
        let e = math();
        assert_eq!(e.subject(), "Math");
        assert_eq!(e.room(), "101");
        assert_eq!(e.professor(), "Antonio");
        assert_eq!(e.group(), "A");
        assert_eq!(e.schedule().day, Day::MONDAY);
        assert_eq!(e.schedule().time_range.as_str(), "10:00-11:00");
    }

    #[test]
    fn test_identical() {
        assert!(math().is_identical(&math()));

        let moved = Event::new_unchecked(
            "Math",
            "101",
            "Antonio",
            Schedule::new(Day::TUESDAY, "10:00-11:00"),
            "A",
        );
        assert!(!math().is_identical(&moved));

        let regrouped = Event::new_unchecked(
            "Math",
            "101",
            "Antonio",
            Schedule::new(Day::MONDAY, "10:00-11:00"),
            "B",
        );
        assert!(!math().is_identical(&regrouped));
    }
}
