//! Forbidden giver/receiver pairs.

use std::fmt;

use crate::participant::ParticipantId;

/// An unordered pair of participants who must never give to each other,
/// in either direction.
///
/// The pair is stored normalized, so restrictions compare and hash equal
/// regardless of argument order.
///
/// # Example
///
/// ```
/// use santaforge_core::Restriction;
///
/// let r = Restriction::new("bob", "alice");
/// assert_eq!(r, Restriction::new("alice", "bob"));
/// assert!(r.forbids(&"alice".into(), &"bob".into()));
/// assert!(r.forbids(&"bob".into(), &"alice".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawRestriction", into = "RawRestriction")
)]
pub struct Restriction {
    low: ParticipantId,
    high: ParticipantId,
}

impl Restriction {
    /// Creates a restriction between two participants.
    ///
    /// A self-pair is representable so that it can be reported back to the
    /// caller; graph construction rejects it.
    pub fn new(a: impl Into<ParticipantId>, b: impl Into<ParticipantId>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Returns both participants, in normalized order.
    pub fn pair(&self) -> (&ParticipantId, &ParticipantId) {
        (&self.low, &self.high)
    }

    /// Returns true if both sides name the same participant.
    pub fn is_self_pair(&self) -> bool {
        self.low == self.high
    }

    /// Returns true if `id` is one side of this restriction.
    pub fn involves(&self, id: &ParticipantId) -> bool {
        self.low == *id || self.high == *id
    }

    /// Returns the other side of the restriction, if `id` is involved.
    pub fn partner_of(&self, id: &ParticipantId) -> Option<&ParticipantId> {
        if self.low == *id {
            Some(&self.high)
        } else if self.high == *id {
            Some(&self.low)
        } else {
            None
        }
    }

    /// Returns true if this restriction forbids `giver` giving to `receiver`.
    pub fn forbids(&self, giver: &ParticipantId, receiver: &ParticipantId) -> bool {
        (self.low == *giver && self.high == *receiver)
            || (self.high == *giver && self.low == *receiver)
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.low, self.high)
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct RawRestriction {
    participant1: ParticipantId,
    participant2: ParticipantId,
}

#[cfg(feature = "serde")]
impl From<RawRestriction> for Restriction {
    fn from(raw: RawRestriction) -> Self {
        Restriction::new(raw.participant1, raw.participant2)
    }
}

#[cfg(feature = "serde")]
impl From<Restriction> for RawRestriction {
    fn from(r: Restriction) -> Self {
        RawRestriction {
            participant1: r.low,
            participant2: r.high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_restriction_is_unordered() {
        let mut set = HashSet::new();
        set.insert(Restriction::new("a", "b"));
        set.insert(Restriction::new("b", "a"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_partner_of() {
        let r = Restriction::new("a", "b");
        assert_eq!(r.partner_of(&"a".into()), Some(&ParticipantId::from("b")));
        assert_eq!(r.partner_of(&"b".into()), Some(&ParticipantId::from("a")));
        assert_eq!(r.partner_of(&"c".into()), None);
    }

    #[test]
    fn test_self_pair() {
        assert!(Restriction::new("a", "a").is_self_pair());
        assert!(!Restriction::new("a", "b").is_self_pair());
    }

    #[test]
    fn test_display() {
        assert_eq!(Restriction::new("zed", "amy").to_string(), "{amy, zed}");
    }
}
