//! Event repository: the boundary where raw input becomes [`Event`]s.
//!
//! Every event handed to the conflict evaluator comes from here, so its
//! fields are guaranteed to be in the catalog and its times well formed.

use rand::prelude::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::models::{Catalog, Day, Event, Schedule};
use crate::validation::validate_event;

/// Raw, unvalidated event fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub subject: String,
    pub room: String,
    pub professor: String,
    /// Full day name, e.g. `"Monday"`.
    pub day: String,
    /// `"HH:MM-HH:MM"`.
    pub time: String,
    pub group: String,
}

impl RawEvent {
    /// Creates raw fields; the schedule is a `(day, time range)` pair.
    pub fn new(
        subject: impl Into<String>,
        room: impl Into<String>,
        professor: impl Into<String>,
        schedule: (&str, &str),
        group: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            room: room.into(),
            professor: professor.into(),
            day: schedule.0.to_string(),
            time: schedule.1.to_string(),
            group: group.into(),
        }
    }
}

/// Creates validated events against a catalog.
#[derive(Debug, Clone, Default)]
pub struct EventRepository {
    catalog: Catalog,
}

impl EventRepository {
    /// Creates a repository backed by the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog events are validated against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validates the fields and builds an event.
    ///
    /// # Example
    ///
    /// ```
    /// use u_timetable::repository::EventRepository;
    ///
    /// let repo = EventRepository::default();
    /// let event = repo
    ///     .create_event("Math", "101", "Antonio", ("Monday", "10:00-11:00"), "A")
    ///     .unwrap();
    /// assert_eq!(event.room(), "101");
    ///
    /// assert!(repo
    ///     .create_event("Math", "101", "Antonio", ("Monday", "10:00"), "A")
    ///     .is_err());
    /// ```
    pub fn create_event(
        &self,
        subject: &str,
        room: &str,
        professor: &str,
        schedule: (&str, &str),
        group: &str,
    ) -> std::result::Result<Event, ValidationError> {
        self.create_from_raw(&RawEvent::new(subject, room, professor, schedule, group))
    }

    /// Validates raw fields and builds an event.
    pub fn create_from_raw(&self, raw: &RawEvent) -> std::result::Result<Event, ValidationError> {
        validate_event(&self.catalog, raw)
    }

    /// Parses a JSON array of raw events and validates each, stopping at the
    /// first invalid record.
    pub fn load_json(&self, json: &str) -> Result<Vec<Event>> {
        let raws: Vec<RawEvent> = serde_json::from_str(json)?;
        let events = raws
            .iter()
            .map(|raw| self.create_from_raw(raw))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::debug!("loaded {} events", events.len());
        Ok(events)
    }

    /// Draws a random valid event from the catalog.
    ///
    /// The slot starts on the hour between 08:00 and 19:00 and lasts one
    /// or two hours. Returns `None` if any catalog list is empty.
    pub fn random_event<R: Rng>(&self, rng: &mut R) -> Option<Event> {
        let subject = self.catalog.subjects().choose(rng)?;
        let room = self.catalog.rooms().choose(rng)?;
        let professor = self.catalog.professors().choose(rng)?;
        let group = self.catalog.groups().choose(rng)?;
        let day = *Day::ALL.choose(rng)?;

        let start: u32 = rng.random_range(8..20);
        let end = start + rng.random_range(1..=2);
        let range = format!("{start:02}:00-{end:02}:00");

        Some(Event::new_unchecked(
            subject.as_str(),
            room.as_str(),
            professor.as_str(),
            Schedule::new(day, range.as_str()),
            group.as_str(),
        ))
    }
}
