//! Conflict scan summary.
//!
//! Aggregate figures for one pass over an event sequence.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Pairs checked | n(n-1)/2 |
//! | Conflicting pairs | Pairs that cannot coexist |
//! | Identical pairs | Pairs of exact duplicates |
//! | Conflict rate | Conflicting / checked |
//! | Conflicts by event | Conflicting pairs touching each reported position |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{find_conflicting_events, Conflict, CoexistenceObserver};
use crate::error::FormatError;
use crate::models::Event;

/// Results of a full conflict scan with headline figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictSummary {
    /// Number of events scanned.
    pub event_count: usize,
    /// Number of unordered pairs evaluated.
    pub pairs_checked: usize,
    /// Conflicts in enumeration order.
    pub conflicts: Vec<Conflict>,
    /// Number of pairs of identical events.
    pub identical_pairs: usize,
    /// Fraction of checked pairs that conflict (0.0..1.0).
    pub conflict_rate: f64,
    /// Conflicting pairs per 1-based position, as reported in `conflicts`.
    pub conflicts_by_event: BTreeMap<usize, usize>,
}

impl ConflictSummary {
    /// Scans `events` and summarizes the outcome.
    ///
    /// Positions follow [`find_conflicting_events`], including its
    /// first-match numbering of duplicates.
    pub fn calculate(
        events: &[Event],
        observer: &dyn CoexistenceObserver,
    ) -> Result<Self, FormatError> {
        let conflicts = find_conflicting_events(events, observer)?;

        let n = events.len();
        let pairs_checked = n * n.saturating_sub(1) / 2;

        let mut identical_pairs = 0;
        for (i, a) in events.iter().enumerate() {
            identical_pairs += events[i + 1..].iter().filter(|b| a.is_identical(b)).count();
        }

        let mut conflicts_by_event = BTreeMap::new();
        for c in &conflicts {
            *conflicts_by_event.entry(c.first).or_insert(0) += 1;
            *conflicts_by_event.entry(c.second).or_insert(0) += 1;
        }

        let conflict_rate = if pairs_checked > 0 {
            conflicts.len() as f64 / pairs_checked as f64
        } else {
            0.0
        };

        Ok(Self {
            event_count: n,
            pairs_checked,
            conflicts,
            identical_pairs,
            conflict_rate,
            conflicts_by_event,
        })
    }

    /// Whether every pair coexists.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of conflicting pairs.
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::NoopObserver;
    use crate::repository::EventRepository;

    fn events(rows: &[(&str, &str, &str, &str, &str)]) -> Vec<Event> {
        let repo = EventRepository::default();
        rows.iter()
            .map(|&(subject, room, professor, time, group)| {
                repo.create_event(subject, room, professor, ("Monday", time), group)
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_summary_counts() {
        let evs = events(&[
            ("Math", "101", "Antonio", "10:00-11:00", "A"),
            ("Physics", "101", "Maria", "10:00-11:00", "B"),
            ("Math", "101", "Antonio", "10:00-11:00", "A"),
            ("Biology", "104", "Francisco", "12:00-13:00", "D"),
        ]);
        let summary = ConflictSummary::calculate(&evs, &NoopObserver).unwrap();

        assert_eq!(summary.event_count, 4);
        assert_eq!(summary.pairs_checked, 6);
        assert_eq!(summary.identical_pairs, 1);
        // (1,2) and (2,3) reported as (2,1).
        assert_eq!(summary.conflict_count(), 2);
        assert!((summary.conflict_rate - 2.0 / 6.0).abs() < 1e-10);
        assert_eq!(summary.conflicts_by_event.get(&1), Some(&2));
        assert_eq!(summary.conflicts_by_event.get(&2), Some(&2));
        assert_eq!(summary.conflicts_by_event.get(&3), None);
        assert!(!summary.is_conflict_free());
    }

    #[test]
    fn test_summary_empty() {
        let summary = ConflictSummary::calculate(&[], &NoopObserver).unwrap();
        assert_eq!(summary.pairs_checked, 0);
        assert_eq!(summary.conflict_rate, 0.0);
        assert!(summary.is_conflict_free());
    }

    #[test]
    fn test_summary_serializes() {
        let evs = events(&[
            ("Math", "101", "Antonio", "10:00-11:00", "A"),
            ("Physics", "101", "Maria", "10:30-11:30", "B"),
        ]);
        let summary = ConflictSummary::calculate(&evs, &NoopObserver).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["conflicts"][0]["first"], 1);
        assert_eq!(json["conflicts"][0]["second"], 2);
    }
}
