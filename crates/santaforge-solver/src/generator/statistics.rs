//! Matching run statistics.

use std::time::Duration;

/// Counters collected during one matching run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchStatistics {
    /// Number of participants in the run.
    pub participant_count: usize,
    /// Givers matched when the run ended.
    pub matched_count: usize,
    /// Augmenting-path searches started (one per giver that was free when
    /// visited).
    pub augmenting_searches: u64,
    /// Receivers examined across all searches.
    pub receivers_probed: u64,
    /// Times an already matched giver was moved to another receiver.
    pub reassignments: u64,
    /// Wall time spent matching.
    pub duration: Duration,
}

impl MatchStatistics {
    /// Returns true if every participant was matched.
    pub fn is_perfect(&self) -> bool {
        self.matched_count == self.participant_count
    }

    /// Average receivers probed per search.
    pub fn probes_per_search(&self) -> f64 {
        if self.augmenting_searches == 0 {
            0.0
        } else {
            self.receivers_probed as f64 / self.augmenting_searches as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probes_per_search() {
        let stats = MatchStatistics {
            augmenting_searches: 4,
            receivers_probed: 10,
            ..MatchStatistics::default()
        };
        assert!((stats.probes_per_search() - 2.5).abs() < f64::EPSILON);
        assert_eq!(MatchStatistics::default().probes_per_search(), 0.0);
    }

    #[test]
    fn test_is_perfect() {
        let stats = MatchStatistics {
            participant_count: 3,
            matched_count: 3,
            ..MatchStatistics::default()
        };
        assert!(stats.is_perfect());
    }
}
