//! Participant record checks applied before generation.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex_lite::Regex;
use santaforge_config::RosterRules;
use santaforge_core::{InvalidInputError, Participant};

// local@domain.tld with no whitespace, same shape the sign-up form accepts.
static CONTACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("contact pattern"));

/// Applies the enabled `rules` to `participants`, in this order: group size,
/// names, contact format, contact uniqueness. Stops at the first failure.
///
/// # Example
///
/// ```
/// use santaforge_config::RosterRules;
/// use santaforge_core::{InvalidInputError, Participant};
/// use santaforge_solver::check_roster;
///
/// let people = vec![
///     Participant::new("1", "Ann", "ann@example.com"),
///     Participant::new("2", "Bo", "ANN@example.com"),
/// ];
///
/// assert!(check_roster(&people, &RosterRules::default()).is_ok());
/// assert!(matches!(
///     check_roster(&people, &RosterRules::strict()),
///     Err(InvalidInputError::DuplicateContact { .. })
/// ));
/// ```
pub fn check_roster(
    participants: &[Participant],
    rules: &RosterRules,
) -> Result<(), InvalidInputError> {
    if let Some(max) = rules.max_participants {
        if participants.len() > max {
            return Err(InvalidInputError::TooManyParticipants {
                count: participants.len(),
                max,
            });
        }
    }

    if rules.require_names {
        if let Some(p) = participants.iter().find(|p| p.name.trim().is_empty()) {
            return Err(InvalidInputError::BlankName(p.id.clone()));
        }
    }

    if rules.require_contacts {
        if let Some(p) = participants
            .iter()
            .find(|p| !CONTACT.is_match(p.contact.trim()))
        {
            return Err(InvalidInputError::InvalidContact {
                participant: p.id.clone(),
                contact: p.contact.clone(),
            });
        }
    }

    if rules.unique_contacts {
        let mut seen: HashMap<String, &Participant> = HashMap::with_capacity(participants.len());
        for p in participants {
            let key = p.contact.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            if let Some(first) = seen.get(&key) {
                return Err(InvalidInputError::DuplicateContact {
                    first: first.id.clone(),
                    second: p.id.clone(),
                    contact: p.contact.clone(),
                });
            }
            seen.insert(key, p);
        }
    }

    Ok(())
}
