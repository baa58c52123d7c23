//! Generation entry points that hide the pipeline wiring.

use std::path::Path;

use rand::Rng;
use santaforge_config::{ConfigError, GeneratorConfig};
use santaforge_core::{
    Assignment, InvalidInputError, Participant, ParticipantId, Restriction, Result,
    ValidationResult,
};
use santaforge_solver::{
    check_roster, ConstraintGraph, FeasibilityChecker, MatchGenerator, MatchStatistics, Validator,
};
use tracing::info;

/// Generates an assignment for `participants` under `restrictions`.
///
/// Runs graph construction, the feasibility pre-check, matching and a
/// final independent verification. The same inputs and seed always give
/// the same assignment.
///
/// # Errors
///
/// - [`GenerationError::InvalidInput`](santaforge_core::GenerationError::InvalidInput)
///   for duplicate identifiers, bad restrictions or fewer than two people.
/// - [`GenerationError::Infeasible`](santaforge_core::GenerationError::Infeasible)
///   when the restrictions rule out every assignment.
/// - [`GenerationError::Validation`](santaforge_core::GenerationError::Validation)
///   if the produced assignment fails verification.
pub fn generate_assignment(
    participants: &[Participant],
    restrictions: &[Restriction],
    seed: u64,
) -> Result<Assignment> {
    run_pipeline(participants, restrictions, seed).map(|(assignment, _)| assignment)
}

/// Verifies an assignment computed anywhere against the participants and
/// restrictions, reporting every broken invariant.
pub fn validate_assignment(
    assignment: &Assignment,
    participants: &[Participant],
    restrictions: &[Restriction],
) -> ValidationResult {
    let ids: Vec<ParticipantId> = participants.iter().map(|p| p.id.clone()).collect();
    Validator::verify(assignment, &ids, restrictions)
}

pub(crate) fn run_pipeline(
    participants: &[Participant],
    restrictions: &[Restriction],
    seed: u64,
) -> Result<(Assignment, MatchStatistics)> {
    let graph = ConstraintGraph::build(participants, restrictions)?;
    let count = graph.len();
    if count < 2 {
        return Err(InvalidInputError::TooFewParticipants { count }.into());
    }

    info!(
        event = "generation_start",
        participant_count = count as u64,
        restriction_count = graph.restriction_count() as u64,
        seed = seed,
    );

    FeasibilityChecker::check(&graph, count).into_result()?;
    let (assignment, statistics) = MatchGenerator::new(seed).generate_with_statistics(&graph)?;
    Validator::verify(&assignment, graph.ids(), restrictions)?;

    info!(
        event = "generation_end",
        participant_count = count as u64,
        cycles = assignment.cycles().len() as u64,
        duration_us = statistics.duration.as_micros() as u64,
    );

    Ok((assignment, statistics))
}

/// Result of a configured generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// The verified assignment.
    pub assignment: Assignment,
    /// Seed the run used; pass it back to reproduce the assignment.
    pub seed: u64,
    /// Matching statistics.
    pub statistics: MatchStatistics,
}

/// Generator driven by a [`GeneratorConfig`].
///
/// Applies the configured roster rules before generation and uses the
/// configured seed, drawing a fresh one per run when none is set.
///
/// # Example
///
/// ```
/// use santaforge::{AssignmentGenerator, GeneratorConfig, Participant};
///
/// let generator = AssignmentGenerator::new(GeneratorConfig::new().with_random_seed(1));
/// let people = vec![Participant::with_id("a"), Participant::with_id("b")];
///
/// let outcome = generator.generate(&people, &[]).unwrap();
/// assert_eq!(outcome.seed, 1);
/// assert_eq!(outcome.assignment.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignmentGenerator {
    config: GeneratorConfig,
}

impl AssignmentGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Creates a generator from a TOML configuration file.
    pub fn from_config_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        GeneratorConfig::load(path).map(Self::new)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates with the configured seed, or fresh entropy if unset.
    pub fn generate(
        &self,
        participants: &[Participant],
        restrictions: &[Restriction],
    ) -> Result<GenerationOutcome> {
        let seed = self
            .config
            .random_seed
            .unwrap_or_else(|| rand::rng().random());
        self.generate_with_seed(participants, restrictions, seed)
    }

    /// Generates with an explicit seed, overriding the configured one.
    pub fn generate_with_seed(
        &self,
        participants: &[Participant],
        restrictions: &[Restriction],
        seed: u64,
    ) -> Result<GenerationOutcome> {
        check_roster(participants, &self.config.roster)?;
        let (assignment, statistics) = run_pipeline(participants, restrictions, seed)?;
        Ok(GenerationOutcome {
            assignment,
            seed,
            statistics,
        })
    }
}
