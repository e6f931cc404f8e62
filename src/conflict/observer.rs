//! Observers for informational notices raised during evaluation.

use std::fmt::Debug;

use crate::models::Event;

/// Receives notices from the coexistence check.
///
/// Notices are observational only; they never change a result.
pub trait CoexistenceObserver: Debug {
    /// Called when two compared events are field-for-field identical.
    fn on_identical(&self, first: &Event, second: &Event);
}

/// Emits notices through the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl CoexistenceObserver for LogObserver {
    fn on_identical(&self, first: &Event, _second: &Event) {
        log::info!(
            "Note: the events are identical ({} in room {} with {}, group {}, {})",
            first.subject(),
            first.room(),
            first.professor(),
            first.group(),
            first.schedule()
        );
    }
}

/// Discards all notices.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CoexistenceObserver for NoopObserver {
    fn on_identical(&self, _first: &Event, _second: &Event) {}
}
