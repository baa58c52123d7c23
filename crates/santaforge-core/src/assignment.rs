//! Giver → receiver assignment.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

use crate::participant::ParticipantId;

/// Mapping from each giver to the participant they give a gift to.
///
/// Entries are kept ordered by giver so iteration and serialization are
/// stable. An `Assignment` built by hand carries no guarantees; run it
/// through the validator before trusting it.
///
/// # Example
///
/// ```
/// use santaforge_core::{Assignment, ParticipantId};
///
/// let assignment: Assignment = [("a", "b"), ("b", "a")]
///     .into_iter()
///     .map(|(g, r)| (ParticipantId::from(g), ParticipantId::from(r)))
///     .collect();
///
/// assert_eq!(assignment.len(), 2);
/// assert_eq!(assignment.receiver_of(&"a".into()), Some(&"b".into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Assignment {
    pairs: BTreeMap<ParticipantId, ParticipantId>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `giver` gives to `receiver`, returning the receiver it
    /// replaced, if any.
    pub fn insert(
        &mut self,
        giver: impl Into<ParticipantId>,
        receiver: impl Into<ParticipantId>,
    ) -> Option<ParticipantId> {
        self.pairs.insert(giver.into(), receiver.into())
    }

    /// Returns who `giver` gives to.
    pub fn receiver_of(&self, giver: &ParticipantId) -> Option<&ParticipantId> {
        self.pairs.get(giver)
    }

    /// Returns who gives to `receiver`, if anyone.
    pub fn giver_of(&self, receiver: &ParticipantId) -> Option<&ParticipantId> {
        self.pairs
            .iter()
            .find(|(_, r)| *r == receiver)
            .map(|(g, _)| g)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over `(giver, receiver)` pairs in giver order.
    pub fn iter(&self) -> btree_map::Iter<'_, ParticipantId, ParticipantId> {
        self.pairs.iter()
    }

    pub fn givers(&self) -> impl Iterator<Item = &ParticipantId> {
        self.pairs.keys()
    }

    pub fn receivers(&self) -> impl Iterator<Item = &ParticipantId> {
        self.pairs.values()
    }

    /// Decomposes the assignment into gift cycles.
    ///
    /// Each cycle starts at its smallest giver and follows giver → receiver
    /// links. Chains that leave the giver set or revisit a participant are
    /// cut where they break, so this is total even on invalid input.
    ///
    /// ```
    /// use santaforge_core::{Assignment, ParticipantId};
    ///
    /// let mut a = Assignment::new();
    /// a.insert("a", "b");
    /// a.insert("b", "a");
    /// a.insert("c", "d");
    /// a.insert("d", "c");
    ///
    /// let cycles = a.cycles();
    /// assert_eq!(cycles.len(), 2);
    /// assert_eq!(cycles[0], vec![ParticipantId::from("a"), ParticipantId::from("b")]);
    /// ```
    pub fn cycles(&self) -> Vec<Vec<ParticipantId>> {
        let mut seen: BTreeSet<&ParticipantId> = BTreeSet::new();
        let mut cycles = Vec::new();

        for start in self.pairs.keys() {
            if seen.contains(start) {
                continue;
            }
            let mut cycle = Vec::new();
            let mut current = start;
            while seen.insert(current) {
                cycle.push(current.clone());
                match self.pairs.get_key_value(current) {
                    Some((_, next)) => match self.pairs.get_key_value(next) {
                        Some((key, _)) => current = key,
                        None => break,
                    },
                    None => break,
                }
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// Consumes the assignment, returning the underlying map.
    pub fn into_inner(self) -> BTreeMap<ParticipantId, ParticipantId> {
        self.pairs
    }
}

impl FromIterator<(ParticipantId, ParticipantId)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (ParticipantId, ParticipantId)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = (&'a ParticipantId, &'a ParticipantId);
    type IntoIter = btree_map::Iter<'a, ParticipantId, ParticipantId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl IntoIterator for Assignment {
    type Item = (ParticipantId, ParticipantId);
    type IntoIter = btree_map::IntoIter<ParticipantId, ParticipantId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
