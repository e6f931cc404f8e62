//! Timetable conflict detection for the U-Engine ecosystem.
//!
//! Models scheduled academic events (subject, room, professor, group,
//! weekly time slot) and decides which pairs of events cannot share a
//! calendar.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Event`, `Schedule`, `Day`, `TimeRange`, `Catalog`
//! - **`validation`**: Allow-list and time-format checks on raw input
//! - **`repository`**: The only way to build validated `Event`s
//! - **`conflict`**: Schedule comparison, coexistence rules, pairwise scan
//!
//! # Architecture
//!
//! Input flows one way: raw fields are validated by the repository into
//! immutable events, and the conflict module only ever reads them. It
//! performs no search or optimization; it classifies pairs.

pub mod conflict;
pub mod error;
pub mod models;
pub mod repository;
pub mod validation;

pub use error::{Error, FormatError, Result, ValidationError};
