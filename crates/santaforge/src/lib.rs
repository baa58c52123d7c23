//! SantaForge - Gift-exchange assignment in Rust
//!
//! Hand over participants and restrictions, get back a giver → receiver
//! assignment where nobody gives to themselves and no restricted pair
//! meets, or a precise explanation of why none exists.
//!
//! # Example
//!
//! ```rust
//! use santaforge::prelude::*;
//!
//! let participants = vec![
//!     Participant::new("ann", "Ann", "ann@example.com"),
//!     Participant::new("bo", "Bo", "bo@example.com"),
//!     Participant::new("cy", "Cy", "cy@example.com"),
//!     Participant::new("di", "Di", "di@example.com"),
//! ];
//! let restrictions = vec![Restriction::new("ann", "bo")];
//!
//! let assignment = generate_assignment(&participants, &restrictions, 42).unwrap();
//! assert_eq!(assignment.len(), 4);
//! assert!(validate_assignment(&assignment, &participants, &restrictions).is_ok());
//! ```

// Core types
pub use santaforge_core::{
    Assignment, GenerationError, InfeasibleConstraintsError, InvalidInputError, Participant,
    ParticipantId, Restriction, Result, ValidationError, ValidationResult, Violation,
};

// Configuration
pub use santaforge_config::{BatchConfig, ConfigError, GeneratorConfig, RosterRules, ThreadCount};

// Building blocks for callers that drive the pipeline themselves
pub use santaforge_solver::{
    check_roster, ConstraintGraph, Feasibility, FeasibilityChecker, MatchGenerator,
    MatchStatistics, Validator,
};

mod batch;
mod generate;

#[cfg(feature = "console")]
pub mod console;

pub use batch::{generate_batch, GroupRequest};
pub use generate::{
    generate_assignment, validate_assignment, AssignmentGenerator, GenerationOutcome,
};

pub mod prelude {
    pub use super::{
        generate_assignment, generate_batch, validate_assignment, AssignmentGenerator,
        GroupRequest,
    };
    pub use super::{
        Assignment, GenerationError, GeneratorConfig, Participant, ParticipantId, Restriction,
    };
}
