//! Participant identity and records.

use std::borrow::Borrow;
use std::fmt;

/// Opaque, stable identifier of a participant within one generation run.
///
/// # Example
///
/// ```
/// use santaforge_core::ParticipantId;
///
/// let id = ParticipantId::new("alice");
/// assert_eq!(id.as_str(), "alice");
/// assert_eq!(id, ParticipantId::from("alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ParticipantId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for ParticipantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ParticipantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A member of a gift exchange.
///
/// The solver only ever reads [`Participant::id`]; the name and contact
/// address are carried for roster checks and for the collaborator that
/// delivers the results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    /// Unique identifier.
    pub id: ParticipantId,
    /// Display name.
    pub name: String,
    /// Contact address (usually an email address).
    pub contact: String,
}

impl Participant {
    /// Creates a participant record.
    pub fn new(
        id: impl Into<ParticipantId>,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
        }
    }

    /// Creates a participant whose name is its identifier and who has no
    /// contact address.
    pub fn with_id(id: impl Into<ParticipantId>) -> Self {
        let id = id.into();
        Self {
            name: id.as_str().to_string(),
            id,
            contact: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_participant_id_conversions() {
        assert_eq!(ParticipantId::from(7u64).as_str(), "7");
        assert_eq!(ParticipantId::from(String::from("bob")).to_string(), "bob");
    }

    #[test]
    fn test_participant_id_borrow_lookup() {
        let ids: HashSet<ParticipantId> = ["a", "b"].into_iter().map(ParticipantId::from).collect();
        assert!(ids.contains("a"));
        assert!(!ids.contains("c"));
    }

    #[test]
    fn test_participant_with_id() {
        let p = Participant::with_id("carol");
        assert_eq!(p.id.as_str(), "carol");
        assert_eq!(p.name, "carol");
        assert!(p.contact.is_empty());
    }
}
