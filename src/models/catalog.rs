//! Allow-list catalog.
//!
//! The catalog names every subject, room, professor and group an event may
//! use. It is plain immutable configuration: the default holds the fixed
//! institutional sets, and a deployment may load its own from JSON.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default allowed subjects.
pub const SUBJECTS: [&str; 4] = ["Math", "Physics", "Chemistry", "Biology"];
/// Default allowed rooms.
pub const ROOMS: [&str; 4] = ["101", "102", "103", "104"];
/// Default allowed professors.
pub const PROFESSORS: [&str; 4] = ["Antonio", "Rocio", "Maria", "Francisco"];
/// Default allowed groups.
pub const GROUPS: [&str; 4] = ["A", "B", "C", "D"];

/// Allowed values for each categorical event field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    subjects: Vec<String>,
    rooms: Vec<String>,
    professors: Vec<String>,
    groups: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(SUBJECTS, ROOMS, PROFESSORS, GROUPS)
    }
}

impl Catalog {
    /// Creates a catalog from explicit lists.
    pub fn new<S: Into<String>>(
        subjects: impl IntoIterator<Item = S>,
        rooms: impl IntoIterator<Item = S>,
        professors: impl IntoIterator<Item = S>,
        groups: impl IntoIterator<Item = S>,
    ) -> Self {
        fn collect<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
            items.into_iter().map(Into::into).collect()
        }
        Self {
            subjects: collect(subjects),
            rooms: collect(rooms),
            professors: collect(professors),
            groups: collect(groups),
        }
    }

    /// Loads a catalog from JSON with `subjects`, `rooms`, `professors`
    /// and `groups` arrays.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }

    pub fn professors(&self) -> &[String] {
        &self.professors
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}
