//! Participant and restriction builders.
//!
//! # Example
//!
//! ```
//! use santaforge_test::fixtures::{participants, restrictions};
//!
//! let people = participants(&["a", "b", "c"]);
//! assert_eq!(people[1].contact, "b@example.com");
//!
//! let pairs = restrictions(&[("a", "b")]);
//! assert_eq!(pairs.len(), 1);
//! ```

use santaforge_core::{Participant, ParticipantId, Restriction};

/// Participants with the given identifiers, a capitalized display name and
/// an `@example.com` contact address.
pub fn participants(ids: &[&str]) -> Vec<Participant> {
    ids.iter()
        .map(|&id| Participant::new(id, display_name(id), format!("{id}@example.com")))
        .collect()
}

/// Participants named `p0`, `p1`, ... `p{n-1}`.
pub fn numbered_participants(n: usize) -> Vec<Participant> {
    let names: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    participants(&refs)
}

/// Restrictions from identifier pairs.
pub fn restrictions(pairs: &[(&str, &str)]) -> Vec<Restriction> {
    pairs.iter().map(|&(a, b)| Restriction::new(a, b)).collect()
}

/// Identifiers from string slices.
pub fn ids(ids: &[&str]) -> Vec<ParticipantId> {
    ids.iter().map(|&id| ParticipantId::from(id)).collect()
}

fn display_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
