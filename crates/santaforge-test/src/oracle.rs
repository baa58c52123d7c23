//! Brute-force oracle over all permutations.
//!
//! Only meant for small groups (the search is factorial); tests use it to
//! confirm feasibility verdicts and to check that generated assignments are
//! among the valid ones.

use std::collections::HashSet;

use santaforge_core::{Assignment, ParticipantId, Restriction};

/// Enumerates every valid assignment, in lexicographic order of receivers
/// chosen for givers taken in `ids` order.
///
/// # Panics
///
/// Panics if more than 9 participants are given.
pub fn enumerate_assignments(
    ids: &[ParticipantId],
    restrictions: &[Restriction],
) -> Vec<Assignment> {
    assert!(ids.len() <= 9, "oracle enumeration is factorial; keep groups small");

    let forbidden: HashSet<(usize, usize)> = restrictions
        .iter()
        .filter_map(|r| {
            let (a, b) = r.pair();
            let a = ids.iter().position(|id| id == a)?;
            let b = ids.iter().position(|id| id == b)?;
            Some((a, b))
        })
        .flat_map(|(a, b)| [(a, b), (b, a)])
        .collect();

    let mut results = Vec::new();
    let mut chosen = Vec::with_capacity(ids.len());
    let mut used = vec![false; ids.len()];
    search(ids, &forbidden, &mut chosen, &mut used, &mut results);
    results
}

/// Number of valid assignments.
pub fn count_valid_assignments(ids: &[ParticipantId], restrictions: &[Restriction]) -> usize {
    enumerate_assignments(ids, restrictions).len()
}

fn search(
    ids: &[ParticipantId],
    forbidden: &HashSet<(usize, usize)>,
    chosen: &mut Vec<usize>,
    used: &mut [bool],
    results: &mut Vec<Assignment>,
) {
    let giver = chosen.len();
    if giver == ids.len() {
        results.push(
            chosen
                .iter()
                .enumerate()
                .map(|(g, &r)| (ids[g].clone(), ids[r].clone()))
                .collect(),
        );
        return;
    }
    for receiver in 0..ids.len() {
        if used[receiver] || receiver == giver || forbidden.contains(&(giver, receiver)) {
            continue;
        }
        used[receiver] = true;
        chosen.push(receiver);
        search(ids, forbidden, chosen, used, results);
        chosen.pop();
        used[receiver] = false;
    }
}
