//! Error types for SantaForge

use thiserror::Error;

use crate::participant::ParticipantId;
use crate::restriction::Restriction;

/// Malformed input supplied by the caller. Always caller-fixable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// A gift exchange needs at least two people.
    #[error("at least 2 participants are required, got {count}")]
    TooFewParticipants { count: usize },

    /// The group exceeds the configured size limit.
    #[error("at most {max} participants are allowed, got {count}")]
    TooManyParticipants { count: usize, max: usize },

    /// Two participants share an identifier.
    #[error("duplicate participant identifier `{0}`")]
    DuplicateParticipant(ParticipantId),

    /// A restriction pairs a participant with themselves.
    #[error("restriction {restriction} pairs a participant with themselves")]
    SelfRestriction { restriction: Restriction },

    /// A restriction names someone who is not a participant.
    #[error("restriction {restriction} references unknown participant `{unknown}`")]
    UnknownParticipant {
        restriction: Restriction,
        unknown: ParticipantId,
    },

    /// A participant has an empty or whitespace-only name.
    #[error("participant `{0}` has a blank name")]
    BlankName(ParticipantId),

    /// A participant's contact address is malformed.
    #[error("participant `{participant}` has an invalid contact address `{contact}`")]
    InvalidContact {
        participant: ParticipantId,
        contact: String,
    },

    /// Two participants share a contact address.
    #[error("participants `{first}` and `{second}` share contact address `{contact}`")]
    DuplicateContact {
        first: ParticipantId,
        second: ParticipantId,
        contact: String,
    },
}

/// The restrictions cannot all be satisfied by any assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfeasibleConstraintsError {
    /// Detected by the structural pre-check: this participant is restricted
    /// from everyone else.
    #[error("participant `{participant}` has no allowed receiver")]
    NoAllowedReceiver { participant: ParticipantId },

    /// The maximum matching is smaller than the group.
    ///
    /// `blocking_givers` and `reachable_receivers` form a Hall witness:
    /// together the blocking givers may only give to the reachable
    /// receivers, and there are fewer of those than givers.
    #[error(
        "no complete assignment exists: {} participant(s) left without a receiver ({}); \
         givers [{}] can only give to [{}]",
        .unmatched.len(),
        join_ids(.unmatched),
        join_ids(.blocking_givers),
        join_ids(.reachable_receivers)
    )]
    Shortfall {
        unmatched: Vec<ParticipantId>,
        blocking_givers: Vec<ParticipantId>,
        reachable_receivers: Vec<ParticipantId>,
    },
}

/// A single broken assignment invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("giver `{0}` is not a participant")]
    UnknownGiver(ParticipantId),

    #[error("`{giver}` gives to `{receiver}`, who is not a participant")]
    UnknownReceiver {
        giver: ParticipantId,
        receiver: ParticipantId,
    },

    #[error("participant `{0}` does not give a gift")]
    MissingGiver(ParticipantId),

    #[error("participant `{0}` does not receive a gift")]
    NeverReceives(ParticipantId),

    #[error("participant `{0}` gives to themselves")]
    SelfAssignment(ParticipantId),

    #[error("`{receiver}` receives from several givers ({})", join_ids(.givers))]
    DuplicateReceiver {
        receiver: ParticipantId,
        givers: Vec<ParticipantId>,
    },

    #[error("`{giver}` gives to `{receiver}` despite a restriction")]
    ForbiddenPair {
        giver: ParticipantId,
        receiver: ParticipantId,
    },
}

/// An assignment failed verification. Carries every violation found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "assignment breaks {} invariant(s): {}",
    .violations.len(),
    join_violations(.violations)
)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns true if `violation` is among the recorded violations.
    pub fn contains(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }
}

/// Main error type for assignment generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("Infeasible constraints: {0}")]
    Infeasible(#[from] InfeasibleConstraintsError),

    /// The generator produced an assignment that failed its own
    /// verification. This is a defect in the generator.
    #[error("Internal validation failure: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Outcome of validating an assignment.
pub type ValidationResult = std::result::Result<(), ValidationError>;

fn join_ids(ids: &[ParticipantId]) -> String {
    ids.iter()
        .map(ParticipantId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortfall_message_lists_witness() {
        let err = InfeasibleConstraintsError::Shortfall {
            unmatched: vec!["b".into()],
            blocking_givers: vec!["a".into(), "b".into()],
            reachable_receivers: vec!["c".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("1 participant(s)"));
        assert!(msg.contains("[a, b]"));
        assert!(msg.contains("[c]"));
    }

    #[test]
    fn test_generation_error_from_conversions() {
        let err: GenerationError = InvalidInputError::TooFewParticipants { count: 1 }.into();
        assert!(matches!(err, GenerationError::InvalidInput(_)));

        let err: GenerationError = ValidationError::new(vec![]).into();
        assert!(matches!(err, GenerationError::Validation(_)));
    }

    #[test]
    fn test_validation_error_contains() {
        let violation = Violation::SelfAssignment("a".into());
        let err = ValidationError::new(vec![violation.clone()]);
        assert!(err.contains(&violation));
        assert!(err.to_string().contains("gives to themselves"));
    }
}
