//! Independent assignment verification.
//!
//! The validator never consults the constraint graph or the generator; it
//! re-derives every invariant from the raw identifiers and restrictions so
//! it can vet assignments computed anywhere.

use std::collections::{BTreeMap, HashSet};

use santaforge_core::{
    Assignment, ParticipantId, Restriction, ValidationError, ValidationResult, Violation,
};

/// Checks assignments against the gift-exchange invariants:
///
/// 1. every participant gives exactly once and receives exactly once,
/// 2. nobody gives to themselves,
/// 3. no restricted pair is used in either direction,
/// 4. no receiver is shared.
///
/// # Example
///
/// ```
/// use santaforge_core::{Assignment, ParticipantId, Restriction, Violation};
/// use santaforge_solver::Validator;
///
/// let ids: Vec<ParticipantId> = vec!["a".into(), "b".into(), "c".into()];
/// let mut assignment = Assignment::new();
/// assignment.insert("a", "b");
/// assignment.insert("b", "c");
/// assignment.insert("c", "a");
///
/// assert!(Validator::verify(&assignment, &ids, &[]).is_ok());
///
/// let err = Validator::verify(&assignment, &ids, &[Restriction::new("b", "c")]).unwrap_err();
/// assert_eq!(
///     err.violations,
///     vec![Violation::ForbiddenPair { giver: "b".into(), receiver: "c".into() }]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Verifies `assignment`, returning every violation found.
    pub fn verify(
        assignment: &Assignment,
        participant_ids: &[ParticipantId],
        restrictions: &[Restriction],
    ) -> ValidationResult {
        let known: HashSet<&ParticipantId> = participant_ids.iter().collect();
        let forbidden: HashSet<&Restriction> = restrictions.iter().collect();

        let mut violations = Vec::new();
        let mut givers_by_receiver: BTreeMap<&ParticipantId, Vec<ParticipantId>> = BTreeMap::new();

        for (giver, receiver) in assignment {
            if !known.contains(giver) {
                violations.push(Violation::UnknownGiver(giver.clone()));
            }
            if !known.contains(receiver) {
                violations.push(Violation::UnknownReceiver {
                    giver: giver.clone(),
                    receiver: receiver.clone(),
                });
            }
            if giver == receiver {
                violations.push(Violation::SelfAssignment(giver.clone()));
            } else if forbidden.contains(&Restriction::new(giver.clone(), receiver.clone())) {
                violations.push(Violation::ForbiddenPair {
                    giver: giver.clone(),
                    receiver: receiver.clone(),
                });
            }
            givers_by_receiver
                .entry(receiver)
                .or_default()
                .push(giver.clone());
        }

        for (receiver, givers) in &givers_by_receiver {
            if givers.len() > 1 {
                violations.push(Violation::DuplicateReceiver {
                    receiver: (*receiver).clone(),
                    givers: givers.clone(),
                });
            }
        }

        let mut reported = HashSet::new();
        for id in participant_ids {
            if !reported.insert(id) {
                continue;
            }
            if assignment.receiver_of(id).is_none() {
                violations.push(Violation::MissingGiver(id.clone()));
            }
            if !givers_by_receiver.contains_key(id) {
                violations.push(Violation::NeverReceives(id.clone()));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }
}
