//! Structural feasibility pre-check.
//!
//! A participant restricted from everyone else can never give (nor, by
//! symmetry, receive), so no assignment exists. The check is necessary but
//! not sufficient; the matcher settles the remaining cases.

use santaforge_core::InfeasibleConstraintsError;
use tracing::debug;

use crate::graph::ConstraintGraph;

/// Verdict of the structural pre-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feasibility {
    /// No obvious obstruction; matching may still fall short.
    Feasible,
    /// Certainly impossible.
    Infeasible(InfeasibleConstraintsError),
}

impl Feasibility {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Feasibility::Feasible)
    }

    /// Converts the verdict into a `Result` for `?` propagation.
    pub fn into_result(self) -> Result<(), InfeasibleConstraintsError> {
        match self {
            Feasibility::Feasible => Ok(()),
            Feasibility::Infeasible(reason) => Err(reason),
        }
    }
}

/// Degree-based fast path that rejects obviously impossible inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeasibilityChecker;

impl FeasibilityChecker {
    /// Reports the first participant (in input order) with zero allowed
    /// receivers, where allowed = (count - 1) - restrictions touching them.
    pub fn check(graph: &ConstraintGraph, participant_count: usize) -> Feasibility {
        debug_assert_eq!(graph.len(), participant_count);

        let candidates = participant_count.saturating_sub(1);
        for index in 0..graph.len() {
            let allowed = candidates.saturating_sub(graph.excluded_count(index));
            if allowed == 0 {
                let participant = graph.id(index).clone();
                debug!(
                    event = "infeasible",
                    reason = "no_allowed_receiver",
                    participant = %participant,
                );
                return Feasibility::Infeasible(InfeasibleConstraintsError::NoAllowedReceiver {
                    participant,
                });
            }
        }
        Feasibility::Feasible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use santaforge_test::{participants, restrictions};

    fn check(ids: &[&str], pairs: &[(&str, &str)]) -> Feasibility {
        let graph = ConstraintGraph::build(&participants(ids), &restrictions(pairs)).unwrap();
        FeasibilityChecker::check(&graph, ids.len())
    }

    #[test]
    fn test_unrestricted_is_feasible() {
        assert!(check(&["a", "b", "c"], &[]).is_feasible());
    }

    #[test]
    fn test_isolated_participant_is_infeasible() {
        let verdict = check(&["a", "b", "c"], &[("a", "b"), ("c", "a")]);
        assert_eq!(
            verdict,
            Feasibility::Infeasible(InfeasibleConstraintsError::NoAllowedReceiver {
                participant: "a".into(),
            })
        );
    }

    #[test]
    fn test_reports_first_in_input_order() {
        let verdict = check(&["x", "y"], &[("x", "y")]);
        assert_eq!(
            verdict.into_result(),
            Err(InfeasibleConstraintsError::NoAllowedReceiver {
                participant: "x".into(),
            })
        );
    }

    #[test]
    fn test_degree_check_is_not_sufficient() {
        // Each of a and b can only give to c; the pre-check cannot see the
        // collision.
        assert!(check(&["a", "b", "c"], &[("a", "b")]).is_feasible());
    }

    #[test]
    fn test_single_participant_has_no_receiver() {
        assert!(!check(&["solo"], &[]).is_feasible());
    }
}
