//! Parallel generation for independent groups.
//!
//! Requests share nothing, so they fan out over rayon without any
//! coordination. Results come back in request order.

use rayon::prelude::*;
use santaforge_config::ThreadCount;
use santaforge_core::{Assignment, Participant, Restriction, Result};
use tracing::warn;

use crate::generate::{generate_assignment, AssignmentGenerator, GenerationOutcome};

/// One group's generation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRequest {
    pub participants: Vec<Participant>,
    pub restrictions: Vec<Restriction>,
    pub seed: u64,
}

impl GroupRequest {
    pub fn new(participants: Vec<Participant>, restrictions: Vec<Restriction>, seed: u64) -> Self {
        Self {
            participants,
            restrictions,
            seed,
        }
    }
}

/// Runs [`generate_assignment`] for every request on the global rayon pool.
///
/// # Example
///
/// ```
/// use santaforge::{generate_batch, GroupRequest, Participant};
///
/// fn group(names: &[&str]) -> Vec<Participant> {
///     names.iter().map(|&n| Participant::with_id(n)).collect()
/// }
///
/// let requests = vec![
///     GroupRequest::new(group(&["a", "b"]), vec![], 1),
///     GroupRequest::new(group(&["solo"]), vec![], 2),
/// ];
///
/// let results = generate_batch(&requests);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn generate_batch(requests: &[GroupRequest]) -> Vec<Result<Assignment>> {
    requests
        .par_iter()
        .map(|r| generate_assignment(&r.participants, &r.restrictions, r.seed))
        .collect()
}

impl AssignmentGenerator {
    /// Runs every request with this generator's roster rules, using each
    /// request's own seed, on the configured number of threads.
    pub fn generate_batch(&self, requests: &[GroupRequest]) -> Vec<Result<GenerationOutcome>> {
        let run = |r: &GroupRequest| {
            self.generate_with_seed(&r.participants, &r.restrictions, r.seed)
        };

        match self.config().batch.thread_count {
            ThreadCount::None => requests.iter().map(run).collect(),
            ThreadCount::Auto => requests.par_iter().map(run).collect(),
            ThreadCount::Count(threads) => {
                on_pool(dedicated_pool(threads), || requests.par_iter().map(run).collect())
            }
        }
    }
}

/// Builds a pool with `threads` workers, or `None` if the pool cannot be
/// created.
fn dedicated_pool(threads: usize) -> Option<rayon::ThreadPool> {
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => Some(pool),
        Err(err) => {
            warn!(
                event = "thread_pool_unavailable",
                threads = threads as u64,
                error = %err,
                "falling back to the global pool"
            );
            None
        }
    }
}

/// Runs `job` inside `pool`, or on the global pool when there is none.
fn on_pool<T, F>(pool: Option<rayon::ThreadPool>, job: F) -> T
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    match pool {
        Some(pool) => pool.install(job),
        None => job(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedicated_pool_has_requested_threads() {
        let pool = dedicated_pool(3).unwrap();
        assert_eq!(pool.current_num_threads(), 3);
        assert_eq!(on_pool(Some(pool), rayon::current_num_threads), 3);
    }

    #[test]
    fn test_missing_pool_runs_on_global_pool() {
        assert_eq!(
            on_pool(None, rayon::current_num_threads),
            rayon::current_num_threads()
        );

        let requests: Vec<GroupRequest> = (0..4u64)
            .map(|seed| {
                let people = ["a", "b", "c"].iter().map(|&n| Participant::with_id(n)).collect();
                GroupRequest::new(people, Vec::new(), seed)
            })
            .collect();
        let results: Vec<Result<Assignment>> = on_pool(None, || generate_batch(&requests));
        assert_eq!(results, generate_batch(&requests));
    }
}
