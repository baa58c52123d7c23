//! SantaForge Core - Core types for gift-exchange assignment
//!
//! This crate provides the fundamental abstractions for SantaForge:
//! - Participant identity and records
//! - Restrictions (forbidden giver/receiver pairs)
//! - The giver → receiver assignment produced by the solver
//! - The error taxonomy shared by every crate in the workspace

pub mod assignment;
pub mod error;
pub mod participant;
pub mod restriction;

#[cfg(test)]
mod assignment_tests;

pub use assignment::Assignment;
pub use error::{
    GenerationError, InfeasibleConstraintsError, InvalidInputError, Result, ValidationError,
    ValidationResult, Violation,
};
pub use participant::{Participant, ParticipantId};
pub use restriction::Restriction;
