//! SantaForge Solver Engine
//!
//! This crate provides the assignment machinery, leaf-first:
//! - [`ConstraintGraph`]: exclusion graph over participants and restrictions
//! - [`FeasibilityChecker`]: structural fast-path rejection
//! - [`MatchGenerator`]: seeded augmenting-path perfect matching
//! - [`Validator`]: independent invariant re-check of any assignment
//! - [`roster`]: optional participant record checks

pub mod feasibility;
pub mod generator;
pub mod graph;
pub mod roster;
pub mod validator;

pub use feasibility::{Feasibility, FeasibilityChecker};
pub use generator::{MatchGenerator, MatchStatistics};
pub use graph::ConstraintGraph;
pub use roster::check_roster;
pub use validator::Validator;
