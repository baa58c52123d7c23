//! Exclusion graph over participants and restrictions.
//!
//! Participants are indexed in input order. The graph stores a dense
//! forbidden matrix whose diagonal is always set, so a giver never sees
//! itself as a candidate receiver.

use std::collections::HashMap;

use santaforge_core::{InvalidInputError, Participant, ParticipantId, Restriction};
use tracing::debug;

/// Read-only view of who may not give to whom.
///
/// The restriction relation is symmetric: if `a` may not give to `b`,
/// `b` may not give to `a` either.
///
/// # Example
///
/// ```
/// use santaforge_core::{Participant, Restriction};
/// use santaforge_solver::ConstraintGraph;
///
/// let participants = vec![
///     Participant::with_id("a"),
///     Participant::with_id("b"),
///     Participant::with_id("c"),
/// ];
/// let graph = ConstraintGraph::build(&participants, &[Restriction::new("a", "b")]).unwrap();
///
/// assert_eq!(graph.len(), 3);
/// assert!(graph.is_forbidden(&"a".into(), &"b".into()));
/// assert!(graph.is_forbidden(&"b".into(), &"a".into()));
/// assert!(!graph.is_forbidden(&"a".into(), &"c".into()));
/// assert_eq!(graph.allowed_count(0), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    ids: Vec<ParticipantId>,
    index: HashMap<ParticipantId, usize>,
    // Row-major n x n; forbidden[g * n + r] is true if g may not give to r.
    forbidden: Vec<bool>,
    restriction_count: usize,
}

impl ConstraintGraph {
    /// Builds the graph from participant records.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] on a duplicate identifier, a
    /// self-pair restriction or a restriction naming an unknown participant.
    pub fn build(
        participants: &[Participant],
        restrictions: &[Restriction],
    ) -> Result<Self, InvalidInputError> {
        Self::from_ids(participants.iter().map(|p| p.id.clone()), restrictions)
    }

    /// Builds the graph from bare identifiers.
    pub fn from_ids<I>(ids: I, restrictions: &[Restriction]) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = ParticipantId>,
    {
        let ids: Vec<ParticipantId> = ids.into_iter().collect();
        let n = ids.len();

        let mut index = HashMap::with_capacity(n);
        for (i, id) in ids.iter().enumerate() {
            if index.insert(id.clone(), i).is_some() {
                return Err(InvalidInputError::DuplicateParticipant(id.clone()));
            }
        }

        let mut forbidden = vec![false; n * n];
        for i in 0..n {
            forbidden[i * n + i] = true;
        }

        let mut restriction_count = 0;
        for restriction in restrictions {
            if restriction.is_self_pair() {
                return Err(InvalidInputError::SelfRestriction {
                    restriction: restriction.clone(),
                });
            }
            let (a, b) = restriction.pair();
            let a = lookup(&index, restriction, a)?;
            let b = lookup(&index, restriction, b)?;

            // Duplicate restrictions are idempotent.
            if !forbidden[a * n + b] {
                forbidden[a * n + b] = true;
                forbidden[b * n + a] = true;
                restriction_count += 1;
            }
        }

        debug!(
            event = "graph_built",
            participant_count = n as u64,
            restriction_count = restriction_count as u64,
        );

        Ok(Self {
            ids,
            index,
            forbidden,
            restriction_count,
        })
    }

    /// Returns the number of participants.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the participant identifiers in input order.
    pub fn ids(&self) -> &[ParticipantId] {
        &self.ids
    }

    /// Returns the identifier at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn id(&self, index: usize) -> &ParticipantId {
        &self.ids[index]
    }

    pub fn index_of(&self, id: &ParticipantId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Returns the number of distinct restrictions applied.
    pub fn restriction_count(&self) -> usize {
        self.restriction_count
    }

    /// Returns true if the giver at index `giver` may not give to `receiver`.
    pub fn is_forbidden_index(&self, giver: usize, receiver: usize) -> bool {
        self.forbidden[giver * self.len() + receiver]
    }

    /// Returns true if `giver` may not give to `receiver`.
    ///
    /// Pairs involving an unknown identifier are always forbidden.
    pub fn is_forbidden(&self, giver: &ParticipantId, receiver: &ParticipantId) -> bool {
        match (self.index_of(giver), self.index_of(receiver)) {
            (Some(g), Some(r)) => self.is_forbidden_index(g, r),
            _ => true,
        }
    }

    /// Iterates over the partners `id` is restricted from, excluding itself.
    pub fn forbidden_partners<'a>(
        &'a self,
        id: &ParticipantId,
    ) -> impl Iterator<Item = &'a ParticipantId> + 'a {
        let row = self.index_of(id);
        self.ids
            .iter()
            .enumerate()
            .filter(move |&(other, _)| {
                row.is_some_and(|row| row != other && self.is_forbidden_index(row, other))
            })
            .map(|(_, id)| id)
    }

    /// Iterates over the receivers the giver at `index` may give to.
    pub fn allowed_receivers(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&r| !self.is_forbidden_index(index, r))
    }

    /// Returns the number of receivers the giver at `index` may give to.
    pub fn allowed_count(&self, index: usize) -> usize {
        self.allowed_receivers(index).count()
    }

    /// Returns the number of restrictions touching the participant at
    /// `index`, not counting the implicit self-exclusion.
    pub fn excluded_count(&self, index: usize) -> usize {
        let n = self.len();
        self.forbidden[index * n..(index + 1) * n]
            .iter()
            .filter(|&&f| f)
            .count()
            - 1
    }
}

fn lookup(
    index: &HashMap<ParticipantId, usize>,
    restriction: &Restriction,
    id: &ParticipantId,
) -> Result<usize, InvalidInputError> {
    index
        .get(id)
        .copied()
        .ok_or_else(|| InvalidInputError::UnknownParticipant {
            restriction: restriction.clone(),
            unknown: id.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use santaforge_test::{participants, restrictions};

    #[test]
    fn test_build_is_symmetric_and_irreflexive() {
        let people = participants(&["a", "b", "c", "d"]);
        let graph = ConstraintGraph::build(&people, &restrictions(&[("a", "c")])).unwrap();

        for g in 0..graph.len() {
            assert!(graph.is_forbidden_index(g, g));
            for r in 0..graph.len() {
                assert_eq!(
                    graph.is_forbidden_index(g, r),
                    graph.is_forbidden_index(r, g)
                );
            }
        }
        assert!(graph.is_forbidden(&"c".into(), &"a".into()));
        assert_eq!(graph.restriction_count(), 1);
    }

    #[test]
    fn test_duplicate_restrictions_are_idempotent() {
        let people = participants(&["a", "b", "c"]);
        let graph =
            ConstraintGraph::build(&people, &restrictions(&[("a", "b"), ("b", "a"), ("a", "b")]))
                .unwrap();
        assert_eq!(graph.restriction_count(), 1);
        assert_eq!(graph.excluded_count(0), 1);
    }

    #[test]
    fn test_duplicate_participant_rejected() {
        let people = participants(&["a", "b", "a"]);
        let err = ConstraintGraph::build(&people, &[]).unwrap_err();
        assert_eq!(err, InvalidInputError::DuplicateParticipant("a".into()));
    }

    #[test]
    fn test_self_restriction_rejected() {
        let people = participants(&["a", "b"]);
        let err = ConstraintGraph::build(&people, &restrictions(&[("b", "b")])).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::SelfRestriction {
                restriction: Restriction::new("b", "b"),
            }
        );
    }

    #[test]
    fn test_unknown_participant_rejected() {
        let people = participants(&["a", "b"]);
        let err = ConstraintGraph::build(&people, &restrictions(&[("a", "zed")])).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::UnknownParticipant {
                restriction: Restriction::new("a", "zed"),
                unknown: "zed".into(),
            }
        );
    }

    #[test]
    fn test_forbidden_partners_excludes_self() {
        let people = participants(&["a", "b", "c"]);
        let graph =
            ConstraintGraph::build(&people, &restrictions(&[("a", "b"), ("a", "c")])).unwrap();
        let partners: Vec<&str> = graph
            .forbidden_partners(&"a".into())
            .map(ParticipantId::as_str)
            .collect();
        assert_eq!(partners, vec!["b", "c"]);
        assert_eq!(graph.allowed_count(0), 0);
        assert_eq!(graph.forbidden_partners(&"nobody".into()).count(), 0);
    }

    #[test]
    fn test_allowed_receivers() {
        let people = participants(&["a", "b", "c", "d"]);
        let graph = ConstraintGraph::build(&people, &restrictions(&[("b", "d")])).unwrap();
        assert_eq!(graph.allowed_receivers(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(graph.allowed_count(0), 3);
    }
}
