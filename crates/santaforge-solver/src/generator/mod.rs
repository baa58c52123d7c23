//! Seeded perfect-matching assignment generator.
//!
//! The seed drives a Fisher-Yates shuffle of the giver visiting order and
//! of every giver's candidate receivers. Kuhn's algorithm then runs over
//! that order. Whether an assignment is found never depends on the seed;
//! only which of the valid assignments is returned does.

mod matching;
mod statistics;


use std::time::Instant;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use santaforge_core::{
    Assignment, GenerationError, InfeasibleConstraintsError, InvalidInputError, ParticipantId,
};
use tracing::{debug, trace};

use self::matching::BipartiteMatcher;
use crate::graph::ConstraintGraph;

pub use statistics::MatchStatistics;

/// Builds assignments from a constraint graph.
///
/// Deterministic: the same graph and seed always produce the same
/// assignment.
///
/// # Example
///
/// ```
/// use santaforge_core::Participant;
/// use santaforge_solver::{ConstraintGraph, MatchGenerator};
///
/// let participants = vec![Participant::with_id("a"), Participant::with_id("b")];
/// let graph = ConstraintGraph::build(&participants, &[]).unwrap();
///
/// let assignment = MatchGenerator::new(7).generate(&graph).unwrap();
/// assert_eq!(assignment.receiver_of(&"a".into()), Some(&"b".into()));
/// assert_eq!(assignment.receiver_of(&"b".into()), Some(&"a".into()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchGenerator {
    seed: u64,
}

impl MatchGenerator {
    /// Creates a generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Produces an assignment for every participant in `graph`.
    ///
    /// # Errors
    ///
    /// - [`InvalidInputError::TooFewParticipants`] for fewer than two
    ///   participants.
    /// - [`InfeasibleConstraintsError::Shortfall`] when no perfect matching
    ///   exists, naming the unmatched givers and a Hall witness.
    pub fn generate(&self, graph: &ConstraintGraph) -> Result<Assignment, GenerationError> {
        self.generate_with_statistics(graph)
            .map(|(assignment, _)| assignment)
    }

    /// Like [`MatchGenerator::generate`], also returning run statistics.
    pub fn generate_with_statistics(
        &self,
        graph: &ConstraintGraph,
    ) -> Result<(Assignment, MatchStatistics), GenerationError> {
        let n = graph.len();
        if n < 2 {
            return Err(InvalidInputError::TooFewParticipants { count: n }.into());
        }

        let start = Instant::now();
        let mut stats = MatchStatistics {
            participant_count: n,
            ..MatchStatistics::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut rng);

        let candidates: Vec<Vec<usize>> = (0..n)
            .map(|giver| {
                let mut receivers: Vec<usize> = graph.allowed_receivers(giver).collect();
                receivers.shuffle(&mut rng);
                receivers
            })
            .collect();

        debug!(
            event = "matching_start",
            participant_count = n as u64,
            seed = self.seed,
        );

        let mut matcher = BipartiteMatcher::new(candidates);
        for &giver in &order {
            if !matcher.augment_from(giver, &mut stats) {
                trace!(event = "giver_unmatched", giver = %graph.id(giver));
            }
        }
        stats.duration = start.elapsed();

        debug!(
            event = "matching_end",
            matched = stats.matched_count as u64,
            participant_count = n as u64,
            searches = stats.augmenting_searches,
            probes = stats.receivers_probed,
            reassignments = stats.reassignments,
            duration_us = stats.duration.as_micros() as u64,
        );

        let unmatched = matcher.unmatched();
        if !unmatched.is_empty() {
            let (givers, receivers) = matcher.hall_witness();
            return Err(InfeasibleConstraintsError::Shortfall {
                unmatched: to_ids(graph, &unmatched),
                blocking_givers: to_ids(graph, &givers),
                reachable_receivers: to_ids(graph, &receivers),
            }
            .into());
        }

        let assignment = matcher
            .receivers()
            .iter()
            .enumerate()
            .filter_map(|(giver, receiver)| {
                receiver.map(|r| (graph.id(giver).clone(), graph.id(r).clone()))
            })
            .collect();

        Ok((assignment, stats))
    }
}

fn to_ids(graph: &ConstraintGraph, indices: &[usize]) -> Vec<ParticipantId> {
    indices.iter().map(|&i| graph.id(i).clone()).collect()
}
