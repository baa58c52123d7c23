//! End-to-end generation scenarios.

use santaforge::prelude::*;
use santaforge::{InfeasibleConstraintsError, InvalidInputError, Violation};
use santaforge_test::{enumerate_assignments, ids, participants, restrictions};

fn pairs(assignment: &Assignment) -> Vec<(String, String)> {
    assignment
        .iter()
        .map(|(g, r)| (g.to_string(), r.to_string()))
        .collect()
}

#[test]
fn test_two_participants_swap() {
    let people = participants(&["a", "b"]);
    let assignment = generate_assignment(&people, &[], 0).unwrap();
    assert_eq!(
        pairs(&assignment),
        vec![
            ("a".to_string(), "b".to_string()),
            ("b".to_string(), "a".to_string())
        ]
    );
}

#[test]
fn test_three_participants_never_self_assigned() {
    let people = participants(&["a", "b", "c"]);
    let ring_one: Vec<(String, String)> = [("a", "b"), ("b", "c"), ("c", "a")]
        .iter()
        .map(|&(g, r)| (g.to_string(), r.to_string()))
        .collect();
    let ring_two: Vec<(String, String)> = [("a", "c"), ("b", "a"), ("c", "b")]
        .iter()
        .map(|&(g, r)| (g.to_string(), r.to_string()))
        .collect();

    for seed in 0..50 {
        let got = pairs(&generate_assignment(&people, &[], seed).unwrap());
        assert!(got == ring_one || got == ring_two, "unexpected {got:?}");
    }
}

#[test]
fn test_excluded_pair_among_three_is_infeasible() {
    let people = participants(&["a", "b", "c"]);
    let restricted = restrictions(&[("a", "b")]);
    assert!(enumerate_assignments(&ids(&["a", "b", "c"]), &restricted).is_empty());

    for seed in 0..20 {
        let err = generate_assignment(&people, &restricted, seed).unwrap_err();
        assert!(
            matches!(
                err,
                GenerationError::Infeasible(InfeasibleConstraintsError::Shortfall { .. })
            ),
            "seed {seed}: {err}"
        );
    }
}

#[test]
fn test_four_with_one_restriction_succeeds_every_seed() {
    let people = participants(&["a", "b", "c", "d"]);
    let restricted = restrictions(&[("b", "d")]);
    let valid = enumerate_assignments(&ids(&["a", "b", "c", "d"]), &restricted);
    assert!(!valid.is_empty());

    for seed in 0..100 {
        let assignment = generate_assignment(&people, &restricted, seed).unwrap();
        assert!(valid.contains(&assignment));
        assert!(validate_assignment(&assignment, &people, &restricted).is_ok());
    }
}

#[test]
fn test_isolated_participant_reported_by_fast_path() {
    let people = participants(&["a", "b", "c", "d"]);
    let restricted = restrictions(&[("d", "a"), ("d", "b"), ("d", "c")]);
    for seed in 0..5 {
        assert_eq!(
            generate_assignment(&people, &restricted, seed).unwrap_err(),
            GenerationError::Infeasible(InfeasibleConstraintsError::NoAllowedReceiver {
                participant: "d".into(),
            })
        );
    }
}

#[test]
fn test_invalid_inputs_are_rejected() {
    assert_eq!(
        generate_assignment(&participants(&["a"]), &[], 1).unwrap_err(),
        GenerationError::InvalidInput(InvalidInputError::TooFewParticipants { count: 1 })
    );
    assert_eq!(
        generate_assignment(&[], &[], 1).unwrap_err(),
        GenerationError::InvalidInput(InvalidInputError::TooFewParticipants { count: 0 })
    );
    assert!(matches!(
        generate_assignment(&participants(&["a", "b", "b"]), &[], 1),
        Err(GenerationError::InvalidInput(
            InvalidInputError::DuplicateParticipant(_)
        ))
    ));
    assert!(matches!(
        generate_assignment(&participants(&["a", "b", "c"]), &restrictions(&[("c", "c")]), 1),
        Err(GenerationError::InvalidInput(
            InvalidInputError::SelfRestriction { .. }
        ))
    ));
    assert!(matches!(
        generate_assignment(&participants(&["a", "b", "c"]), &restrictions(&[("a", "q")]), 1),
        Err(GenerationError::InvalidInput(
            InvalidInputError::UnknownParticipant { .. }
        ))
    ));
}

#[test]
fn test_same_seed_is_reproducible() {
    let people = participants(&["a", "b", "c", "d", "e", "f", "g"]);
    let restricted = restrictions(&[("a", "b"), ("c", "d"), ("e", "f")]);
    let first = generate_assignment(&people, &restricted, 31337).unwrap();
    for _ in 0..5 {
        assert_eq!(generate_assignment(&people, &restricted, 31337).unwrap(), first);
    }
}

#[test]
fn test_hand_crafted_forbidden_pair_is_cited() {
    let people = participants(&["a", "b", "c"]);
    let restricted = restrictions(&[("a", "c")]);
    let mut assignment = Assignment::new();
    assignment.insert("a", "c");
    assignment.insert("c", "b");
    assignment.insert("b", "a");

    let err = validate_assignment(&assignment, &people, &restricted).unwrap_err();
    assert_eq!(
        err.violations,
        vec![Violation::ForbiddenPair {
            giver: "a".into(),
            receiver: "c".into(),
        }]
    );
}

#[test]
fn test_restrictions_loaded_from_json() {
    let people = participants(&["a", "b", "c", "d"]);
    let restricted: Vec<Restriction> = serde_json::from_str(
        r#"[{"participant1":"d","participant2":"b"},{"participant1":"a","participant2":"c"}]"#,
    )
    .unwrap();
    assert_eq!(restricted, restrictions(&[("b", "d"), ("a", "c")]));

    let assignment = generate_assignment(&people, &restricted, 9).unwrap();
    assert!(validate_assignment(&assignment, &people, &restricted).is_ok());
    let json = serde_json::to_string(&assignment).unwrap();
    assert_eq!(serde_json::from_str::<Assignment>(&json).unwrap(), assignment);
}
